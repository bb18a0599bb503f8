/// Shop open/closed status as used by `/admin/shop`.

pub const STATUS_CLOSED: i32 = 0;
pub const STATUS_OPEN: i32 = 1;

pub fn status_text(status: i32) -> &'static str {
    if status == STATUS_OPEN {
        "营业中"
    } else {
        "打烊中"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(STATUS_OPEN), "营业中");
        assert_eq!(status_text(STATUS_CLOSED), "打烊中");
    }
}
