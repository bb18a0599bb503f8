use serde::{Deserialize, Serialize};

use crate::shared::list::PageQuery;

// ============================================================================
// Entity
// ============================================================================

pub const STATUS_OFF_SALE: i32 = 0;
pub const STATUS_ON_SALE: i32 = 1;

/// Combo package ("setmeal") as returned by the backend. The nested
/// dish list is only populated by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setmeal {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub status: i32,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
    #[serde(default)]
    pub setmeal_dishes: Option<Vec<SetmealDish>>,
}

/// A dish line item inside a combo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetmealDish {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub dish_id: i64,
    pub name: String,
    pub price: f64,
    pub copies: i32,
}

pub fn status_text(status: i32) -> &'static str {
    if status == STATUS_ON_SALE {
        "起售"
    } else {
        "停售"
    }
}

/// Complement of the locally cached status, never re-read from the
/// server before flipping.
pub fn toggled_status(status: i32) -> i32 {
    if status == STATUS_ON_SALE {
        STATUS_OFF_SALE
    } else {
        STATUS_ON_SALE
    }
}

pub fn toggle_action_text(new_status: i32) -> &'static str {
    if new_status == STATUS_ON_SALE {
        "起售"
    } else {
        "停售"
    }
}

// ============================================================================
// Page query
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetmealPageQuery {
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl Default for SetmealPageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            name: None,
            category_id: None,
            status: None,
        }
    }
}

impl PageQuery for SetmealPageQuery {
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

/// Transient create/edit buffer. `price` keeps the raw input text; the
/// dish list is carried through untouched between detail fetch and
/// update submit.
#[derive(Debug, Clone, PartialEq)]
pub struct SetmealForm {
    pub id: Option<i64>,
    pub name: String,
    pub category_id: i64,
    pub price: String,
    pub image: String,
    pub description: String,
    pub status: i32,
    pub dishes: Vec<SetmealDish>,
}

impl SetmealForm {
    pub fn blank() -> Self {
        Self {
            id: None,
            name: String::new(),
            category_id: 0,
            price: "0".to_string(),
            image: String::new(),
            description: String::new(),
            status: STATUS_ON_SALE,
            dishes: Vec::new(),
        }
    }

    /// Edit buffer from the detail response.
    pub fn from_setmeal(detail: &Setmeal) -> Self {
        Self {
            id: Some(detail.id),
            name: detail.name.clone(),
            category_id: detail.category_id,
            price: detail.price.to_string(),
            image: detail.image.clone().unwrap_or_default(),
            description: detail.description.clone().unwrap_or_default(),
            status: detail.status,
            dishes: detail.setmeal_dishes.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> SetmealFormErrors {
        SetmealFormErrors {
            name: validate_name(&self.name),
            category_id: validate_category_id(self.category_id),
            price: validate_price(&self.price),
            image: validate_image(&self.image),
        }
    }

    pub fn payload(&self) -> Option<SetmealPayload> {
        if !self.validate().is_clean() {
            return None;
        }
        Some(SetmealPayload {
            id: self.id,
            name: self.name.trim().to_string(),
            category_id: self.category_id,
            price: self.price.trim().parse().unwrap_or(0.0),
            image: self.image.clone(),
            description: self.description.clone(),
            status: self.status,
            setmeal_dishes: self.dishes.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetmealFormErrors {
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
}

impl SetmealFormErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none()
            && self.category_id.is_none()
            && self.price.is_none()
            && self.image.is_none()
    }
}

pub fn validate_name(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("套餐名称不能为空".to_string());
    }
    None
}

pub fn validate_category_id(category_id: i64) -> Option<String> {
    if category_id == 0 {
        return Some("套餐分类不能为空".to_string());
    }
    None
}

pub fn validate_price(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("套餐价格不能为空".to_string());
    }
    match value.parse::<f64>() {
        Ok(n) if n > 0.0 => None,
        _ => Some("套餐价格必须大于0".to_string()),
    }
}

/// The image URL is only ever populated by a successful upload, so an
/// empty value also blocks submit until an upload has completed.
pub fn validate_image(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("套餐图片不能为空".to_string());
    }
    None
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetmealPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub category_id: i64,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub status: i32,
    pub setmeal_dishes: Vec<SetmealDish>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_rejects_text_zero_and_negative_identically() {
        assert!(validate_price("").is_some());
        assert_eq!(validate_price("abc"), validate_price("-3"));
        assert_eq!(validate_price("0"), Some("套餐价格必须大于0".to_string()));
        assert_eq!(validate_price("38.5"), None);
    }

    #[test]
    fn test_unset_category_and_missing_image_block_submit() {
        let mut form = SetmealForm::blank();
        form.name = "工作日套餐".to_string();
        form.price = "25".to_string();
        let errors = form.validate();
        assert!(errors.category_id.is_some());
        assert!(errors.image.is_some());
        assert!(form.payload().is_none());
    }

    #[test]
    fn test_detail_round_trips_dish_list_into_payload() {
        let detail: Setmeal = serde_json::from_str(
            r#"{
                "id": 11, "name": "双人餐", "categoryId": 4, "price": 58.0,
                "image": "https://img.example.com/a.png", "description": "",
                "status": 1,
                "setmealDishes": [
                    {"dishId": 2, "name": "宫保鸡丁", "price": 22.0, "copies": 1}
                ]
            }"#,
        )
        .unwrap();
        let form = SetmealForm::from_setmeal(&detail);
        let payload = form.payload().unwrap();
        assert_eq!(payload.setmeal_dishes, detail.setmeal_dishes.unwrap());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["categoryId"], 4);
        assert_eq!(json["setmealDishes"][0]["dishId"], 2);
    }

    #[test]
    fn test_toggle_is_local_complement() {
        assert_eq!(toggled_status(STATUS_ON_SALE), STATUS_OFF_SALE);
        assert_eq!(toggle_action_text(STATUS_OFF_SALE), "停售");
    }
}
