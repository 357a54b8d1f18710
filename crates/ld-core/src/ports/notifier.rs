use crate::ids::NoticeKey;

/// Keyed notification registry.
///
/// `pending` hands back the key owning that toast; `dismiss` targets that
/// key only. Concurrent operations each hold their own key, so resolving
/// one never disturbs another.
pub trait NotifierPort: Send + Sync {
    fn pending(&self, message: &str) -> NoticeKey;
    fn dismiss(&self, key: &NoticeKey);
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
