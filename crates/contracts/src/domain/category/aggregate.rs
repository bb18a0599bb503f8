use serde::{Deserialize, Serialize};

use crate::shared::list::PageQuery;

// ============================================================================
// Entity
// ============================================================================

pub const TYPE_DISH: i32 = 1;
pub const TYPE_COMBO: i32 = 2;

pub const STATUS_DISABLED: i32 = 0;
pub const STATUS_ENABLED: i32 = 1;

/// Dish/combo category as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: i32,
    pub sort: i32,
    pub status: i32,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

pub fn type_text(category_type: i32) -> &'static str {
    if category_type == TYPE_DISH {
        "菜品分类"
    } else {
        "套餐分类"
    }
}

pub fn status_text(status: i32) -> &'static str {
    if status == STATUS_ENABLED {
        "启用"
    } else {
        "禁用"
    }
}

/// Complement of the current status. Toggling never re-reads server
/// truth first; the flip is computed from the locally cached value.
pub fn toggled_status(status: i32) -> i32 {
    if status == STATUS_ENABLED {
        STATUS_DISABLED
    } else {
        STATUS_ENABLED
    }
}

/// Verb for the toggle confirmation and toast, named after the status
/// the row is about to get.
pub fn toggle_action_text(new_status: i32) -> &'static str {
    if new_status == STATUS_ENABLED {
        "启用"
    } else {
        "禁用"
    }
}

// ============================================================================
// Page query
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPageQuery {
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category_type: Option<i32>,
}

impl Default for CategoryPageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            name: None,
            category_type: None,
        }
    }
}

impl PageQuery for CategoryPageQuery {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    fn set_page_size(&mut self, size: u32) {
        self.page_size = size;
    }
}

// ============================================================================
// Form buffer
// ============================================================================

/// Transient create/edit buffer. `sort` keeps the raw input text so
/// validation treats typed and numeric input identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryForm {
    pub id: Option<i64>,
    pub name: String,
    pub category_type: i32,
    pub sort: String,
}

impl CategoryForm {
    /// Blank buffer for the create dialog, keeping the chosen type
    /// (also used by "save and continue adding").
    pub fn blank(category_type: i32) -> Self {
        Self {
            id: None,
            name: String::new(),
            category_type,
            sort: "0".to_string(),
        }
    }

    /// Edit buffer copied from an already-loaded row.
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: Some(category.id),
            name: category.name.clone(),
            category_type: category.category_type,
            sort: category.sort.to_string(),
        }
    }

    pub fn validate(&self) -> CategoryFormErrors {
        CategoryFormErrors {
            name: validate_name(&self.name),
            sort: validate_sort(&self.sort),
        }
    }

    /// Submission payload, available only when the buffer validates.
    pub fn payload(&self) -> Option<CategoryPayload> {
        if !self.validate().is_clean() {
            return None;
        }
        Some(CategoryPayload {
            id: self.id,
            name: self.name.trim().to_string(),
            category_type: self.category_type,
            sort: self.sort.trim().parse().unwrap_or(0),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFormErrors {
    pub name: Option<String>,
    pub sort: Option<String>,
}

impl CategoryFormErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.sort.is_none()
    }
}

pub fn validate_name(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("分类名称不能为空".to_string());
    }
    None
}

pub fn validate_sort(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("排序不能为空".to_string());
    }
    match value.parse::<i64>() {
        Ok(n) if n >= 0 => None,
        _ => Some("排序必须为非负整数".to_string()),
    }
}

/// Create/update request body. `id` is present only for updates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: i32,
    pub sort: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_rejects_text_and_negatives_identically() {
        assert!(validate_sort("").is_some());
        assert_eq!(validate_sort("abc"), validate_sort("-1"));
        assert_eq!(validate_sort("3.5"), Some("排序必须为非负整数".to_string()));
        assert_eq!(validate_sort("0"), None);
        assert_eq!(validate_sort(" 12 "), None);
    }

    #[test]
    fn test_blank_form_submit_populates_all_errors() {
        // name="" and sort=-1 -> both errors set, no payload produced
        let form = CategoryForm {
            id: None,
            name: String::new(),
            category_type: TYPE_DISH,
            sort: "-1".to_string(),
        };
        let errors = form.validate();
        assert!(errors.name.is_some());
        assert!(errors.sort.is_some());
        assert!(form.payload().is_none());
    }

    #[test]
    fn test_payload_serializes_wire_names() {
        let form = CategoryForm {
            id: Some(7),
            name: " 热菜 ".to_string(),
            category_type: TYPE_DISH,
            sort: "3".to_string(),
        };
        let json = serde_json::to_value(form.payload().unwrap()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "热菜");
        assert_eq!(json["type"], TYPE_DISH);
        assert_eq!(json["sort"], 3);
    }

    #[test]
    fn test_create_payload_omits_id() {
        let form = CategoryForm::blank(TYPE_COMBO);
        let form = CategoryForm {
            name: "商务套餐".to_string(),
            ..form
        };
        let json = serde_json::to_string(&form.payload().unwrap()).unwrap();
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn test_toggle_is_local_complement() {
        assert_eq!(toggled_status(STATUS_ENABLED), STATUS_DISABLED);
        assert_eq!(toggled_status(STATUS_DISABLED), STATUS_ENABLED);
        assert_eq!(toggle_action_text(STATUS_DISABLED), "禁用");
        assert_eq!(toggle_action_text(STATUS_ENABLED), "启用");
    }

    #[test]
    fn test_blank_keeps_category_type() {
        assert_eq!(CategoryForm::blank(TYPE_COMBO).category_type, TYPE_COMBO);
    }
}
