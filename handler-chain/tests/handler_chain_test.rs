//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: first Reply winning over a later catch-all, Continue and Ignore falling through,
//! insertion order, and handler errors ending the chain.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use handler_chain::HandlerChain;
use relay_core::{Chat, Handler, HandlerResponse, Message, RelayError, User};

fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

/// Replies with a fixed text and counts how often `handle` ran.
struct ReplyHandler {
    text: &'static str,
    calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl Handler for ReplyHandler {
    async fn handle(&self, _message: &Message) -> relay_core::Result<HandlerResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(HandlerResponse::Reply(self.text.to_string()))
    }
}

/// Returns a fixed response without side effects.
struct FixedHandler(HandlerResponse);

#[async_trait::async_trait]
impl Handler for FixedHandler {
    async fn handle(&self, _message: &Message) -> relay_core::Result<HandlerResponse> {
        Ok(self.0.clone())
    }
}

/// **Test: An empty chain returns Continue.**
#[tokio::test]
async fn test_empty_chain_continues() {
    let chain = HandlerChain::new();
    assert!(chain.is_empty());

    let result = chain.handle(&create_test_message("hi")).await.unwrap();
    assert_eq!(result, HandlerResponse::Continue);
}

/// **Test: The first Reply ends the handle phase; later handlers never run.**
///
/// **Setup:** Specific handler replying "first", catch-all replying "second".
/// **Expected:** Result is Reply("first"); catch-all handle count stays 0.
#[tokio::test]
async fn test_first_reply_wins() {
    let first_calls = Arc::new(AtomicUsize::new(0));
    let second_calls = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(ReplyHandler {
            text: "first",
            calls: first_calls.clone(),
        }))
        .add_handler(Arc::new(ReplyHandler {
            text: "second",
            calls: second_calls.clone(),
        }));
    assert_eq!(chain.len(), 2);

    let result = chain.handle(&create_test_message("hi")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("first".to_string()));
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

/// **Test: Continue and Ignore fall through to the next handler.**
#[tokio::test]
async fn test_continue_and_ignore_fall_through() {
    let calls = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(FixedHandler(HandlerResponse::Continue)))
        .add_handler(Arc::new(FixedHandler(HandlerResponse::Ignore)))
        .add_handler(Arc::new(ReplyHandler {
            text: "catch-all",
            calls: calls.clone(),
        }));

    let result = chain.handle(&create_test_message("hi")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("catch-all".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// **Test: Handlers run in insertion order and nothing after the first Reply runs.**
#[tokio::test]
async fn test_handlers_run_in_insertion_order() {
    struct OrderHandler {
        name: &'static str,
        response: HandlerResponse,
        order: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait::async_trait]
    impl Handler for OrderHandler {
        async fn handle(&self, _message: &Message) -> relay_core::Result<HandlerResponse> {
            self.order.lock().unwrap().push(self.name);
            Ok(self.response.clone())
        }
    }

    let order = Arc::new(Mutex::new(Vec::new()));
    let step = |name, response| {
        Arc::new(OrderHandler {
            name,
            response,
            order: order.clone(),
        })
    };
    let chain = HandlerChain::new()
        .add_handler(step("first", HandlerResponse::Continue))
        .add_handler(step("second", HandlerResponse::Ignore))
        .add_handler(step("third", HandlerResponse::Reply("ok".to_string())))
        .add_handler(step("fourth", HandlerResponse::Reply("late".to_string())));

    let result = chain.handle(&create_test_message("hi")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("ok".to_string()));
    assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
}

/// **Test: A handler error ends the chain and is returned to the caller.**
#[tokio::test]
async fn test_handler_error_ends_chain() {
    struct FailingHandler;

    #[async_trait::async_trait]
    impl Handler for FailingHandler {
        async fn handle(&self, _message: &Message) -> relay_core::Result<HandlerResponse> {
            Err(RelayError::Bot("send failed".to_string()))
        }
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(FailingHandler))
        .add_handler(Arc::new(ReplyHandler {
            text: "never",
            calls: calls.clone(),
        }));

    let err = chain.handle(&create_test_message("hi")).await.unwrap_err();

    assert!(matches!(err, RelayError::Bot(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
