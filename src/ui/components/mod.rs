pub mod badges;
pub mod chat_area;
pub mod charts;
pub mod input_bar;
pub mod session_list;
