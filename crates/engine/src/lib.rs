//! # Predictive Engine
//!
//! The engine behind a text field that shows an inline completion after the
//! characters the user typed. It keeps what the user authored ("user text")
//! strictly apart from what is displayed (user text plus the suggestion
//! tail), and works out from each edit event what the user actually added or
//! removed.
//!
//! ## Usage
//!
//! ```rust
//! use predictive_engine::{EditEvent, PredictiveField, StaticSuggestion};
//!
//! let mut field = PredictiveField::new().with_provider(StaticSuggestion::new("this is a test"));
//! let outcome = field.apply_edit(&EditEvent::insert(0, "th"));
//!
//! assert_eq!(field.user_text(), "th");
//! assert_eq!(outcome.display.text(), "this is a test");
//! assert_eq!(outcome.cursor, 2);
//! ```
//!
//! ## Architecture
//!
//! - **`diff`**: stateless positional classifier (`classify`)
//! - **`field`**: the stateful reconciler (`PredictiveField`)
//! - **`edit`**: edit events and reported outcomes
//! - **`style`**: the two-segment user/prediction split
//! - **`provider`**: the suggestion source trait and stock providers
//! - **`delegate`**: optional host callbacks the field forwards to

pub mod delegate;
pub mod diff;
pub mod edit;
pub mod field;
pub mod provider;
pub mod style;
pub mod text;

pub use delegate::FieldDelegate;
pub use diff::{TextChange, classify};
pub use edit::{EditEvent, EditOutcome, EditRange, EndEditingReason, SubmitOutcome};
pub use field::{FieldBehavior, PredictiveField};
pub use provider::{FieldSnapshot, NullProvider, StaticSuggestion, SuggestionProvider, WordListProvider};
pub use style::{Segment, SegmentRole, StyledText};
