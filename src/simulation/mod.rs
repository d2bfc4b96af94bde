mod simulator;

pub use simulator::ReplySimulator;
