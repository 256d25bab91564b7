use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::{info, warn};

pub const BASE_URL: &str = "http://collegecatalog.uchicago.edu";
pub const START_PATH: &str = "/thecollege/programsofstudy/";

static DEPARTMENT_LINK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ul.nav.leveltwo li a").unwrap());

/// A department entry from the root page's navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentLink {
    pub name: String,
    pub href: String,
}

impl DepartmentLink {
    /// Absolute page URL. The href is a site path and is appended as-is.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.href)
    }
}

pub fn root_url(base_url: &str) -> String {
    format!("{}{}", base_url, START_PATH)
}

/// Parse the root listing page and return department links in document order.
pub fn department_links(html: &str) -> Vec<DepartmentLink> {
    let document = Html::parse_document(html);
    let links: Vec<DepartmentLink> = document
        .select(&DEPARTMENT_LINK_SEL)
        .filter_map(|a| {
            // Each text node stripped, empties dropped, then joined
            let name: String = a.text().map(str::trim).collect();
            match a.value().attr("href") {
                Some(href) => Some(DepartmentLink {
                    name,
                    href: href.to_string(),
                }),
                None => {
                    warn!("Skipping department link without href: {:?}", name);
                    None
                }
            }
        })
        .collect();

    info!("Found {} department links", links.len());
    links
}

// ── Tests ──
