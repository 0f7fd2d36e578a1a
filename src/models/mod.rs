pub mod inbox;
pub mod matching;
pub mod notification;
pub mod transaction;

pub use inbox::InboxItem;
pub use matching::{MatchAction, MatchNotificationRequest, MatchResult, MatchType};
pub use notification::{
    AutoMatchType, AutoMatchedPayload, CrossCurrencyPayload, MatchedPayload, NeedsReviewPayload,
    NotificationEvent, NotificationType, ReviewMatchType,
};
pub use transaction::TransactionItem;
