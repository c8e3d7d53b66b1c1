//! Fixture pages and a scripted fetcher shared by the pipeline tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use ratings_weather_scraper::application::{FetchedPage, PageFetcher};

/// Serves canned responses by URL, falling back to a default page
pub struct StubFetcher {
    default_body: String,
    responses: HashMap<String, (u16, String)>,
    failures: Vec<String>,
    requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn serving(default_body: impl Into<String>) -> Self {
        Self {
            default_body: default_body.into(),
            responses: HashMap::new(),
            failures: Vec::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(mut self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.responses.insert(url.to_string(), (status, body.into()));
        self
    }

    /// Simulate a connection-level fault for `url`
    pub fn fail(mut self, url: &str) -> Self {
        self.failures.push(url.to_string());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        self.requested.lock().unwrap().push(url.to_string());
        if self.failures.iter().any(|u| u == url) {
            return Err(anyhow!("connection refused: {url}"));
        }
        let (status, body) = self
            .responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| (200, self.default_body.clone()));
        Ok(FetchedPage::new(url, status, body))
    }
}

/// One catalog container; `metascore: None` leaves out the badge
pub fn movie_container(title: &str, year: &str, rating: &str, metascore: Option<&str>, votes: &str) -> String {
    let badge = metascore
        .map(|m| {
            format!(
                r#"<div class="inline-block ratings-metascore">
                     <span class="metascore  favorable">{m}        </span>
                     Metascore
                   </div>"#
            )
        })
        .unwrap_or_default();
    format!(
        r#"<div class="lister-item mode-advanced">
             <div class="lister-top-right"><div class="ribbonize"></div></div>
             <div class="lister-item-content">
               <h3 class="lister-item-header">
                 <span class="lister-item-index unbold text-primary">1.</span>
                 <a href="/title/tt0372784/?ref_=adv_li_tt">{title}</a>
                 <span class="lister-item-year text-muted unbold">{year}</span>
               </h3>
               <div class="ratings-bar">
                 <div class="inline-block ratings-imdb-rating" name="ir" data-value="{rating}">
                   <span class="global-sprite rating-star imdb-rating"></span>
                   <strong>{rating}</strong>
                 </div>
                 {badge}
               </div>
               <p class="sort-num_votes-visible">
                 <span class="text-muted">Votes:</span>
                 <span name="nv" data-value="{votes}">{votes}</span>
               </p>
             </div>
           </div>"#
    )
}

pub fn catalog_page(containers: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
           <html><head><title>Feature Film (Sorted by Number of Votes Descending)</title></head>
           <body><div id="main"><div class="lister list detail sub-list">
             <div class="lister-list">{}</div>
           </div></div></body></html>"#,
        containers.concat()
    )
}

/// 50 containers, the first `with_badge` of which carry a metascore
pub fn uniform_catalog_page(with_badge: usize) -> String {
    let containers: Vec<String> = (0..50)
        .map(|i| {
            let metascore = (i < with_badge).then_some("65");
            movie_container(&format!("Title {i}"), "(2005)", "7.5", metascore, "10000")
        })
        .collect();
    catalog_page(&containers)
}

pub fn forecast_period(name: &str, short_desc: &str, temp: &str, title: &str) -> String {
    let class = if temp.contains("Low") { "temp temp-low" } else { "temp temp-high" };
    format!(
        r#"<li class="forecast-tombstone">
             <div class="tombstone-container">
               <p class="period-name">{name}<br><br></p>
               <p><img src="newimages/medium/few.png" alt="{title}" title="{title}" class="forecast-icon"></p>
               <p class="short-desc">{short_desc}</p>
               <p class="{class}">{temp}</p>
             </div>
           </li>"#
    )
}

pub fn forecast_page(periods: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
           <html><head><title>7-Day Forecast</title></head>
           <body>
             <div id="current-conditions" class="panel panel-default"><p>Fair</p></div>
             <div id="seven-day-forecast" class="panel panel-default">
               <div class="panel-heading"><b>Extended Forecast for</b><h2 class="panel-title">San Francisco CA</h2></div>
               <div class="panel-body" id="seven-day-forecast-body">
                 <div id="seven-day-forecast-container"><ul id="seven-day-forecast-list" class="list-unstyled">{}</ul></div>
               </div>
             </div>
           </body></html>"#,
        periods.concat()
    )
}
