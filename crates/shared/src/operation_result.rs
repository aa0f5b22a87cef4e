//! # 操作結果エンベロープ
//!
//! ユースケースが返す統一結果型 `OperationResult<T>` を提供する。
//! HTTP レスポンスのボディもこの形のまま返す。
//!
//! ```json
//! { "succeeded": true, "message": "...", "errors": [], "data": { ... } }
//! ```
//!
//! 失敗時は `data` を出力せず、`errors` に 1 件以上のメッセージを含める。

use serde::Serialize;

/// 複数エラー時の既定メッセージ
pub const MULTIPLE_ERRORS_MESSAGE: &str = "operation had errors";

/// 操作結果
///
/// # 不変条件
///
/// - 成功時: `data` は `Some`、`errors` は空
/// - 失敗時: `data` は `None`、`message` と `errors` は空でない
///
/// ## 使用例
///
/// ```
/// use gestao_shared::OperationResult;
///
/// let ok = OperationResult::success(42, "done");
/// assert!(ok.succeeded());
/// assert_eq!(ok.data(), Some(&42));
///
/// let ng: OperationResult<i32> = OperationResult::failure("not found");
/// assert!(!ng.succeeded());
/// assert_eq!(ng.errors(), ["not found".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult<T> {
    succeeded: bool,
    message:   String,
    errors:    Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data:      Option<T>,
}

impl<T> OperationResult<T> {
    /// 成功結果を作成する
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            message:   message.into(),
            errors:    Vec::new(),
            data:      Some(data),
        }
    }

    /// 単一メッセージの失敗結果を作成する
    ///
    /// `errors` にはメッセージと同じ文字列が 1 件入る。
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            succeeded: false,
            errors:    vec![message.clone()],
            message,
            data:      None,
        }
    }

    /// 複数エラーの失敗結果を作成する
    ///
    /// `errors` が空の場合でも失敗の不変条件を満たすよう、
    /// 既定メッセージを 1 件入れる。
    pub fn failures(errors: Vec<String>) -> Self {
        let errors = if errors.is_empty() {
            vec![MULTIPLE_ERRORS_MESSAGE.to_string()]
        } else {
            errors
        };
        Self {
            succeeded: false,
            message: MULTIPLE_ERRORS_MESSAGE.to_string(),
            errors,
            data: None,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// データの所有権を取り出す
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_successはデータを持ちエラーは空() {
        let result = OperationResult::success("payload", "ok");

        assert!(result.succeeded());
        assert_eq!(result.message(), "ok");
        assert!(result.errors().is_empty());
        assert_eq!(result.into_data(), Some("payload"));
    }

    #[test]
    fn test_failureはメッセージをerrorsにも入れる() {
        let result: OperationResult<()> = OperationResult::failure("client not found");

        assert!(!result.succeeded());
        assert_eq!(result.message(), "client not found");
        assert_eq!(result.errors(), ["client not found".to_string()]);
        assert_eq!(result.data(), None);
    }

    #[test]
    fn test_failuresは既定メッセージと全エラーを持つ() {
        let result: OperationResult<()> =
            OperationResult::failures(vec!["a".to_string(), "b".to_string()]);

        assert!(!result.succeeded());
        assert_eq!(result.message(), MULTIPLE_ERRORS_MESSAGE);
        assert_eq!(result.errors(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_failuresにエラーが無くてもerrorsは空にならない() {
        let result: OperationResult<()> = OperationResult::failures(Vec::new());

        assert_eq!(result.errors().len(), 1);
    }

    #[test]
    fn test_成功時のserializeはdataを含む() {
        let json = serde_json::to_value(OperationResult::success(1, "ok")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "succeeded": true,
                "message": "ok",
                "errors": [],
                "data": 1
            })
        );
    }

    #[test]
    fn test_失敗時のserializeはdataを含まない() {
        let json = serde_json::to_value(OperationResult::<i32>::failure("ng")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "succeeded": false,
                "message": "ng",
                "errors": ["ng"]
            })
        );
    }
}
