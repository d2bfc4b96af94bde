use chrono::{DateTime, Utc};
use eframe::egui;

use crate::common::types::KnowledgeArticle;
use crate::fixtures;
use crate::ui::state::KnowledgeState;

pub const ALL_ARTICLES: &str = "All Articles";

/// Case-insensitive substring match over title and tags, intersected
/// with the selected category. Pure; recomputed every frame.
pub fn filter_articles<'a>(
    articles: &'a [KnowledgeArticle],
    query: &str,
    category: &str,
) -> Vec<&'a KnowledgeArticle> {
    let needle = query.trim().to_lowercase();
    articles
        .iter()
        .filter(|article| {
            let matches_query = needle.is_empty()
                || article.title.to_lowercase().contains(&needle)
                || article
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle));
            let matches_category = category == ALL_ARTICLES || article.category == category;
            matches_query && matches_category
        })
        .collect()
}

pub fn format_relative_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - date).num_days();
    if days <= 0 {
        "Today".to_string()
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{days} days ago")
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

pub fn render(ui: &mut egui::Ui, state: &mut KnowledgeState) {
    if state.selected_article_id.is_some() {
        render_detail(ui, state);
        return;
    }

    ui.heading("Knowledge Base");
    ui.label(egui::RichText::new("Self-service help articles and guides").weak());
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.search_query)
                .hint_text("Search articles, guides, and tutorials...")
                .desired_width(ui.available_width() - 160.0),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new("Total Articles").weak());
            ui.label(
                egui::RichText::new(format!("{}", fixtures::TOTAL_ARTICLES))
                    .strong()
                    .heading(),
            );
        });
    });
    ui.add_space(4.0);

    egui::SidePanel::left("kb_categories")
        .resizable(false)
        .default_width(200.0)
        .show_inside(ui, |ui| {
            ui.heading("Categories");
            ui.separator();
            // Cloned to keep the borrow checker out of the click handler.
            let categories = state.categories.clone();
            for category in &categories {
                let is_selected = state.selected_category == category.name;
                let text = format!("{} ({})", category.name, category.article_count);
                if ui.selectable_label(is_selected, text).clicked() {
                    state.selected_category = category.name.clone();
                }
            }

            ui.add_space(12.0);
            ui.group(|ui| {
                ui.label(egui::RichText::new("Popular This Week").strong());
                ui.colored_label(egui::Color32::from_rgb(0, 180, 0), "📈 +23% views");
                ui.label(
                    egui::RichText::new("Network troubleshooting articles are trending")
                        .weak()
                        .small(),
                );
            });
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        let filtered: Vec<KnowledgeArticle> =
            filter_articles(&state.articles, &state.search_query, &state.selected_category)
                .into_iter()
                .cloned()
                .collect();

        ui.label(egui::RichText::new(format!("{} articles found", filtered.len())).weak());
        ui.add_space(4.0);

        let now = Utc::now();
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for article in &filtered {
                    if article_card(ui, article, now) {
                        state.selected_article_id = Some(article.id.clone());
                    }
                    ui.add_space(6.0);
                }
            });
    });
}

/// One article summary card. Returns true when the title was clicked.
fn article_card(ui: &mut egui::Ui, article: &KnowledgeArticle, now: DateTime<Utc>) -> bool {
    let mut opened = false;
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(article.kind.glyph());
            ui.label(egui::RichText::new(&article.category).weak());
            if article.featured {
                ui.colored_label(egui::Color32::from_rgb(80, 140, 240), "Featured");
            }
        });
        if ui
            .selectable_label(false, egui::RichText::new(&article.title).strong().size(16.0))
            .clicked()
        {
            opened = true;
        }
        ui.label(egui::RichText::new(&article.summary).weak());

        ui.horizontal(|ui| {
            for tag in article.tags.iter().take(3) {
                ui.label(egui::RichText::new(format!("#{tag}")).weak().small());
            }
        });

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(article.author_initials()).small());
            ui.label(egui::RichText::new(&article.author).weak().small());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format_relative_date(article.last_updated, now))
                        .weak()
                        .small(),
                );
            });
        });

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("👁 {}", article.views)).weak().small());
            ui.label(egui::RichText::new(format!("👍 {}", article.likes)).weak().small());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(format!("★ {:.1}", article.rating)).small());
            });
        });
    });
    opened
}

fn render_detail(ui: &mut egui::Ui, state: &mut KnowledgeState) {
    let Some(article) = state.selected_article().cloned() else {
        state.selected_article_id = None;
        return;
    };

    ui.horizontal(|ui| {
        if ui.button("← Back to Knowledge Base").clicked() {
            state.selected_article_id = None;
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let _ = ui.button("Share");
            let _ = ui.button(format!("👍 Like ({})", article.likes));
        });
    });
    ui.add_space(8.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label(article.kind.glyph());
                    ui.label(egui::RichText::new(&article.category).weak());
                    if article.featured {
                        ui.colored_label(egui::Color32::from_rgb(80, 140, 240), "Featured");
                    }
                });
                ui.heading(&article.title);
                ui.label(
                    egui::RichText::new(format!(
                        "By {} • Updated {} • 👁 {} views • ★ {:.1}/5",
                        article.author,
                        format_relative_date(article.last_updated, Utc::now()),
                        article.views,
                        article.rating,
                    ))
                    .weak()
                    .small(),
                );
                ui.separator();

                ui.label(&article.summary);
                ui.add_space(8.0);

                // Placeholder body shared by every article, as in the mock.
                ui.label(egui::RichText::new("Overview").strong().size(16.0));
                ui.label(
                    "This comprehensive guide will walk you through the process step by step. \
                     Whether you're a beginner or experienced user, these instructions will \
                     help you achieve your goal efficiently.",
                );
                ui.add_space(6.0);

                ui.label(egui::RichText::new("Prerequisites").strong().size(16.0));
                ui.label("• Administrative access to your system");
                ui.label("• Stable internet connection");
                ui.label("• Latest version of required software");
                ui.add_space(6.0);

                ui.label(egui::RichText::new("Step-by-Step Instructions").strong().size(16.0));
                ui.label(egui::RichText::new("Step 1: Initial Setup").strong());
                ui.label("Begin by accessing the main dashboard and navigating to the settings section.");
                ui.label(egui::RichText::new("Step 2: Configuration").strong());
                ui.label("Configure the necessary parameters according to your specific requirements.");
                ui.label(egui::RichText::new("Step 3: Verification").strong());
                ui.label("Test the configuration to ensure everything is working correctly.");
                ui.add_space(6.0);

                ui.label(egui::RichText::new("Troubleshooting").strong().size(16.0));
                ui.label(
                    "If you encounter any issues during the process, refer to our \
                     troubleshooting section or contact our support team for assistance.",
                );

                ui.separator();
                ui.horizontal(|ui| {
                    for tag in &article.tags {
                        ui.label(egui::RichText::new(format!("#{tag}")).weak().small());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let _ = ui.button("👍");
                        ui.label(egui::RichText::new("Was this helpful?").weak().small());
                    });
                });
            });
        });
}
