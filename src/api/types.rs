use serde::Serialize;

use crate::catalog;
use crate::db::AdWithSearch;
use crate::entities::{logs, searches};
use crate::status::ScannerStatus;
use crate::url_builder;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AdDto {
    pub id: i32,
    pub search_id: i32,
    pub search_name: String,
    pub lbc_id: String,
    pub title: String,
    pub price: i32,
    pub surface: i32,
    pub location: String,
    pub image_url: Option<String>,
    pub url: String,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub is_seen: bool,
    pub is_favorite: bool,
    pub scraped_at: String,
}

impl From<AdWithSearch> for AdDto {
    fn from(row: AdWithSearch) -> Self {
        let ad = row.ad;
        Self {
            id: ad.id,
            search_id: ad.search_id,
            search_name: row.search_name,
            lbc_id: ad.lbc_id,
            title: ad.title,
            price: ad.price,
            surface: ad.surface,
            location: ad.location,
            image_url: ad.image_url,
            url: ad.url,
            category_id: ad.category_id,
            category_name: ad.category_id.map(catalog::category_name),
            is_seen: ad.is_seen,
            is_favorite: ad.is_favorite,
            scraped_at: ad.scraped_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchDto {
    pub id: i32,
    pub name: String,
    pub zipcodes: String,
    pub price_min: Option<i32>,
    pub price_max: Option<i32>,
    pub keywords: String,
    pub category: i32,
    pub category_name: String,
    pub is_donation: bool,
    pub excluded_categories: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub last_checked: Option<String>,
    /// Externally navigable marketplace link for this search.
    pub marketplace_url: String,
}

impl From<searches::Model> for SearchDto {
    fn from(model: searches::Model) -> Self {
        let marketplace_url = url_builder::build_search_url(&model);
        Self {
            id: model.id,
            category_name: catalog::category_name(model.category),
            marketplace_url,
            name: model.name,
            zipcodes: model.zipcodes,
            price_min: model.price_min,
            price_max: model.price_max,
            keywords: model.keywords,
            category: model.category,
            is_donation: model.is_donation,
            excluded_categories: model.excluded_categories,
            is_active: model.is_active,
            created_at: model.created_at,
            last_checked: model.last_checked,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogDto {
    pub id: i64,
    pub message: String,
    pub level: String,
    pub created_at: String,
}

impl From<logs::Model> for LogDto {
    fn from(model: logs::Model) -> Self {
        Self {
            id: model.id,
            message: model.message,
            level: model.level,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryGroupDto {
    pub label: String,
    pub categories: Vec<CategoryDto>,
}

/// The grouped catalog in display order, for option lists.
pub fn category_groups() -> Vec<CategoryGroupDto> {
    catalog::CATEGORY_GROUPS
        .iter()
        .map(|group| CategoryGroupDto {
            label: group.label.to_string(),
            categories: group
                .categories
                .iter()
                .map(|(id, name)| CategoryDto {
                    id: *id,
                    name: (*name).to_string(),
                })
                .collect(),
        })
        .collect()
}

/// View model behind both the dashboard (new ads) and the archives page.
#[derive(Debug, Serialize)]
pub struct AdsView {
    pub ads: Vec<AdDto>,
    pub searches: Vec<SearchDto>,
    pub categories: Vec<CategoryGroupDto>,
    pub scanner_status: ScannerStatus,
    pub logs: Vec<LogDto>,
    pub current_search_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct SearchesView {
    pub searches: Vec<SearchDto>,
    pub categories: Vec<CategoryGroupDto>,
    pub scanner_status: ScannerStatus,
}

/// Polling payload for the new-ads badge.
#[derive(Debug, Serialize)]
pub struct NewAdsCheck {
    pub new_ads_count: u64,
    pub scanner_status: ScannerStatus,
    pub current_time: String,
}

#[derive(Debug, Serialize)]
pub struct SystemStatusDto {
    pub version: String,
    pub uptime_seconds: u64,
    pub timezone: String,
    pub scanner: ScannerStatus,
}
