//! Publication cards filtered by category tabs.

use log::debug;

use crate::core::site::PublicationSpec;

pub const ALL_CATEGORY: &str = "all";

#[derive(Debug, Clone)]
pub struct PublicationCard {
    pub title: String,
    pub category: String,
    pub summary: String,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct CategoryTab {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct PublicationFilter {
    cards: Vec<PublicationCard>,
    tabs: Vec<CategoryTab>,
    no_results: bool,
}

impl PublicationFilter {
    /// Tabs are "All" followed by each category in first-seen order.
    pub fn new(specs: &[PublicationSpec]) -> Self {
        let mut tabs = vec![CategoryTab {
            label: "All".to_string(),
            active: true,
        }];
        for spec in specs {
            let label = tab_label(&spec.category);
            if !tabs.iter().any(|t| t.label.eq_ignore_ascii_case(&label)) {
                tabs.push(CategoryTab {
                    label,
                    active: false,
                });
            }
        }

        let cards = specs
            .iter()
            .map(|spec| PublicationCard {
                title: spec.title.clone(),
                category: spec.category.to_lowercase(),
                summary: spec.summary.clone(),
                visible: true,
            })
            .collect::<Vec<_>>();

        Self {
            no_results: cards.is_empty(),
            cards,
            tabs,
        }
    }

    pub fn cards(&self) -> &[PublicationCard] {
        &self.cards
    }

    pub fn tabs(&self) -> &[CategoryTab] {
        &self.tabs
    }

    pub fn no_results(&self) -> bool {
        self.no_results
    }

    /// Activates a tab and filters by its lowercased label.
    pub fn select_tab(&mut self, index: usize) -> Option<usize> {
        let category = self.tabs.get(index)?.label.to_lowercase();
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            tab.active = i == index;
        }
        Some(self.filter(&category))
    }

    /// Shows cards matching `category` ("all" shows everything). Returns the
    /// number of visible cards.
    pub fn filter(&mut self, category: &str) -> usize {
        let mut visible = 0;
        for card in &mut self.cards {
            card.visible = category == ALL_CATEGORY || card.category == category;
            if card.visible {
                visible += 1;
            }
        }
        self.no_results = visible == 0;
        debug!("Publications filtered by '{}': {} visible", category, visible);
        visible
    }
}

fn tab_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
