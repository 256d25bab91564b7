use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::catalog::{self, DepartmentLink};
use crate::fetch::Fetcher;
use crate::parser::{self, CourseRecord};

/// Course count for one crawled department. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DepartmentSummary {
    #[serde(rename = "Department")]
    pub name: String,
    #[serde(rename = "Number of Courses")]
    pub courses: usize,
}

/// Everything collected during one run.
#[derive(Debug, Default)]
pub struct CatalogRun {
    pub courses: Vec<CourseRecord>,
    pub departments: Vec<DepartmentSummary>,
}

/// Fetch one department page and parse its course blocks.
/// A failed fetch yields no courses.
pub async fn crawl_department(fetcher: &Fetcher, url: &str) -> Vec<CourseRecord> {
    match fetcher.get(url).await {
        Some(html) => parser::parse_department_page(&html),
        None => Vec::new(),
    }
}

/// Fetch the root listing page and return its department links.
/// The root page is required; a failed fetch aborts.
pub async fn fetch_departments(fetcher: &Fetcher, base_url: &str) -> Result<Vec<DepartmentLink>> {
    let root = catalog::root_url(base_url);
    let Some(html) = fetcher.get(&root).await else {
        bail!("Could not fetch root catalog page {}", root);
    };
    Ok(catalog::department_links(&html))
}

/// Crawl every department listed on the root page, one after another.
pub async fn run_catalog(fetcher: &Fetcher, base_url: &str) -> Result<CatalogRun> {
    let links = fetch_departments(fetcher, base_url).await?;

    let pb = ProgressBar::new(links.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let mut run = CatalogRun::default();
    for link in &links {
        pb.set_message(link.name.clone());
        let courses = crawl_department(fetcher, &link.url(base_url)).await;
        info!("Processed {} courses from {}", courses.len(), link.name);

        run.departments.push(DepartmentSummary {
            name: link.name.clone(),
            courses: courses.len(),
        });
        run.courses.extend(courses);
        pb.inc(1);
    }

    pb.finish_and_clear();
    info!(
        "Crawled {} departments, {} courses",
        run.departments.len(),
        run.courses.len()
    );
    Ok(run)
}

// ── Tests ──
