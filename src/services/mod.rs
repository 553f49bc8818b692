//! 服务模块

pub mod agent;
pub mod classifier;
pub mod composer;
pub mod entities;
pub mod fallback;
pub mod normalizer;
pub mod returns;

pub use agent::{SupportAgent, create_support_agent};
pub use classifier::{IntentClassifier, create_intent_classifier};
pub use composer::{ComposedReply, DomainLookups, ReplyClass, ResponseComposer};
pub use entities::EntityExtractor;
pub use fallback::{FallbackClassifier, create_fallback_classifier};
pub use normalizer::{NormalizedText, normalize};
pub use returns::{ReturnService, create_return_service};
