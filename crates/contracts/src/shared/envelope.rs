use serde::Deserialize;

/// Backend success code in the `{code, msg, data}` envelope.
pub const CODE_SUCCESS: i32 = 1;

/// Fallback message when the server gives us nothing usable.
pub const GENERIC_ERROR: &str = "操作失败，请稍后重试";

/// Response envelope shared by every back-office endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload of a successful response.
    pub fn into_result(self) -> Result<T, String> {
        if self.code == CODE_SUCCESS {
            self.data.ok_or_else(|| GENERIC_ERROR.to_string())
        } else {
            Err(server_error_text(self.msg.as_deref(), None))
        }
    }

    /// For endpoints that only acknowledge, without a payload.
    pub fn into_ok(self) -> Result<(), String> {
        if self.code == CODE_SUCCESS {
            Ok(())
        } else {
            Err(server_error_text(self.msg.as_deref(), None))
        }
    }
}

/// Best-effort error message extraction: server `msg` field first,
/// then an HTTP-status-derived message, then the generic fallback.
pub fn server_error_text(msg: Option<&str>, status: Option<u16>) -> String {
    if let Some(m) = msg {
        if !m.trim().is_empty() {
            return m.to_string();
        }
    }
    if let Some(s) = status {
        return format!("请求失败 ({})", s);
    }
    GENERIC_ERROR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let resp: ApiResponse<i32> = serde_json::from_str(r#"{"code":1,"data":42}"#).unwrap();
        assert_eq!(resp.into_result(), Ok(42));
    }

    #[test]
    fn test_failure_envelope_uses_server_msg() {
        let resp: ApiResponse<i32> =
            serde_json::from_str(r#"{"code":0,"msg":"分类下有菜品，不能删除"}"#).unwrap();
        assert_eq!(resp.into_result(), Err("分类下有菜品，不能删除".to_string()));
    }

    #[test]
    fn test_ack_only_envelope() {
        let resp: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"code":1,"msg":null,"data":null}"#).unwrap();
        assert_eq!(resp.into_ok(), Ok(()));
    }

    #[test]
    fn test_error_text_ladder() {
        assert_eq!(server_error_text(Some("余额不足"), Some(500)), "余额不足");
        assert_eq!(server_error_text(Some("   "), Some(500)), "请求失败 (500)");
        assert_eq!(server_error_text(None, Some(404)), "请求失败 (404)");
        assert_eq!(server_error_text(None, None), GENERIC_ERROR);
    }
}
