/// Image upload preconditions, checked before any network call.

pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/jpg"];
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

pub fn validate_image_file(mime: &str, size: u64) -> Result<(), String> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime) {
        return Err("仅能上传PNG、JPEG、JPG类型图片".to_string());
    }
    if size > MAX_IMAGE_BYTES {
        return Err("图片大小不超过10M".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversized_png_rejected() {
        // 12 MB PNG must be rejected locally, no upload call
        let err = validate_image_file("image/png", 12 * 1024 * 1024).unwrap_err();
        assert_eq!(err, "图片大小不超过10M");
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = validate_image_file("image/gif", 1024).unwrap_err();
        assert_eq!(err, "仅能上传PNG、JPEG、JPG类型图片");
    }

    #[test]
    fn test_valid_image_accepted() {
        assert!(validate_image_file("image/jpeg", MAX_IMAGE_BYTES).is_ok());
    }
}
