use super::descriptor::RequestDescriptor;
use super::error::EndpointError;
use super::transport::Transport;
use crate::shared::request_state::RequestState;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::rc::Rc;

type BuildFn<A> = dyn Fn(A) -> Result<RequestDescriptor, EndpointError>;

/// Stateful trigger around one endpoint
///
/// Each trigger sets the state to pending and issues exactly one call.
/// Overlapping calls are not sequenced: whichever resolves last writes
/// the state. No retry, timeout or cancellation.
pub struct AsyncEndpoint<A, T>
where
    T: Send + Sync + 'static,
{
    build: Rc<BuildFn<A>>,
    transport: Rc<dyn Transport>,
    state: RwSignal<RequestState<T>>,
}

impl<A, T> Clone for AsyncEndpoint<A, T>
where
    T: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            build: Rc::clone(&self.build),
            transport: Rc::clone(&self.transport),
            state: self.state,
        }
    }
}

impl<A, T> AsyncEndpoint<A, T>
where
    A: 'static,
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new<F>(build: F, transport: Rc<dyn Transport>) -> Self
    where
        F: Fn(A) -> Result<RequestDescriptor, EndpointError> + 'static,
    {
        Self {
            build: Rc::new(build),
            transport,
            state: RwSignal::new(RequestState::idle()),
        }
    }

    /// Reactive view of the state
    pub fn state(&self) -> ReadSignal<RequestState<T>> {
        self.state.read_only()
    }

    /// Current state without subscribing
    pub fn snapshot(&self) -> RequestState<T> {
        self.state.get_untracked()
    }

    /// Fire a call on the browser event loop
    pub fn trigger(&self, args: A) {
        wasm_bindgen_futures::spawn_local(self.start(args));
    }

    /// Mark the state pending now and return the call as a future
    ///
    /// The returned future settles the state when it completes.
    pub fn start(&self, args: A) -> impl Future<Output = ()> + 'static {
        let descriptor = (self.build)(args);
        self.state.set(RequestState::pending());

        let transport = Rc::clone(&self.transport);
        let state = self.state;
        async move {
            let outcome = match descriptor {
                Ok(descriptor) => {
                    log::debug!("{} {}", descriptor.method.as_str(), descriptor.url);
                    transport
                        .send(&descriptor)
                        .await
                        .and_then(|body| decode::<T>(&body))
                }
                Err(e) => Err(e),
            };

            match &outcome {
                Ok(_) => log::debug!("request settled"),
                Err(e) => log::warn!("request failed: {}", e),
            }
            state.set(RequestState::settle(outcome));
        }
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, EndpointError> {
    serde_json::from_str(body).map_err(|e| EndpointError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use serde::Deserialize;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Generated {
        result: String,
    }

    /// Replies are keyed by prompt text; each resolves when its sender fires
    #[derive(Default)]
    struct ScriptedTransport {
        replies: RefCell<HashMap<String, oneshot::Receiver<Result<String, EndpointError>>>>,
        seen: RefCell<Vec<RequestDescriptor>>,
    }

    impl ScriptedTransport {
        fn reply_later(&self, text: &str) -> oneshot::Sender<Result<String, EndpointError>> {
            let (tx, rx) = oneshot::channel();
            self.replies.borrow_mut().insert(text.to_string(), rx);
            tx
        }

        fn reply_now(&self, text: &str, reply: Result<String, EndpointError>) {
            let tx = self.reply_later(text);
            let _ = tx.send(reply);
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn send(&self, descriptor: &RequestDescriptor) -> Result<String, EndpointError> {
            self.seen.borrow_mut().push(descriptor.clone());
            let text = descriptor
                .body
                .as_ref()
                .and_then(|body| body["text"].as_str())
                .unwrap_or_default()
                .to_string();
            let rx = self
                .replies
                .borrow_mut()
                .remove(&text)
                .ok_or_else(|| EndpointError::Network("no scripted reply".to_string()))?;
            rx.await
                .map_err(|_| EndpointError::Network("reply dropped".to_string()))?
        }
    }

    fn endpoint(transport: &Rc<ScriptedTransport>) -> AsyncEndpoint<serde_json::Value, Generated> {
        let transport: Rc<dyn Transport> = transport.clone();
        AsyncEndpoint::new(
            |data: serde_json::Value| {
                RequestDescriptor::post("http://localhost:5000/generate").with_json(&data)
            },
            transport,
        )
    }

    fn payload(text: &str) -> serde_json::Value {
        json!({ "text": text, "model": "gpt2", "userId": 1 })
    }

    #[test]
    fn test_idle_before_any_trigger() {
        let transport = Rc::new(ScriptedTransport::default());
        let endpoint = endpoint(&transport);
        assert_eq!(endpoint.snapshot(), RequestState::idle());
        assert!(transport.seen.borrow().is_empty());
    }

    #[test]
    fn test_pending_immediately_after_start() {
        let transport = Rc::new(ScriptedTransport::default());
        let endpoint = endpoint(&transport);
        let _tx = transport.reply_later("Hello");

        let call = endpoint.start(payload("Hello"));
        assert_eq!(endpoint.snapshot(), RequestState::pending());
        drop(call);
    }

    #[test]
    fn test_success_stores_decoded_payload() {
        let transport = Rc::new(ScriptedTransport::default());
        let endpoint = endpoint(&transport);
        transport.reply_now("Hello", Ok(r#"{"result":"Hello world"}"#.to_string()));

        block_on(endpoint.start(payload("Hello")));

        let state = endpoint.snapshot();
        assert_eq!(
            state.data,
            Some(Generated {
                result: "Hello world".to_string()
            })
        );
        assert!(state.complete);
        assert!(!state.pending);
        assert!(!state.error);

        let seen = transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method.as_str(), "POST");
        assert_eq!(seen[0].url, "http://localhost:5000/generate");
        assert_eq!(seen[0].body, Some(payload("Hello")));
    }

    #[test]
    fn test_server_error_settles_as_failure() {
        let transport = Rc::new(ScriptedTransport::default());
        let endpoint = endpoint(&transport);
        transport.reply_now("Hello", Err(EndpointError::Status(500)));

        block_on(endpoint.start(payload("Hello")));

        assert_eq!(endpoint.snapshot(), RequestState::failed());
    }

    #[test]
    fn test_network_failure_matches_server_error() {
        let transport = Rc::new(ScriptedTransport::default());
        let endpoint = endpoint(&transport);
        transport.reply_now("Hello", Err(EndpointError::Network("connection refused".to_string())));

        block_on(endpoint.start(payload("Hello")));

        assert_eq!(endpoint.snapshot(), RequestState::failed());
    }

    #[test]
    fn test_malformed_body_settles_as_failure() {
        let transport = Rc::new(ScriptedTransport::default());
        let endpoint = endpoint(&transport);
        transport.reply_now("Hello", Ok("<html>oops</html>".to_string()));

        block_on(endpoint.start(payload("Hello")));

        assert_eq!(endpoint.snapshot(), RequestState::failed());
    }

    #[test]
    fn test_build_failure_skips_transport() {
        let transport = Rc::new(ScriptedTransport::default());
        let dyn_transport: Rc<dyn Transport> = transport.clone();
        let endpoint: AsyncEndpoint<(), Generated> = AsyncEndpoint::new(
            |_: ()| Err(EndpointError::Encode("bad body".to_string())),
            dyn_transport,
        );

        block_on(endpoint.start(()));

        assert_eq!(endpoint.snapshot(), RequestState::failed());
        assert!(transport.seen.borrow().is_empty());
    }

    #[test]
    fn test_retrigger_passes_through_pending_again() {
        let transport = Rc::new(ScriptedTransport::default());
        let endpoint = endpoint(&transport);

        transport.reply_now("Hello", Ok(r#"{"result":"first"}"#.to_string()));
        block_on(endpoint.start(payload("Hello")));
        assert!(endpoint.snapshot().is_settled());

        let tx = transport.reply_later("Hello");
        let call = endpoint.start(payload("Hello"));
        assert_eq!(endpoint.snapshot(), RequestState::pending());

        let _ = tx.send(Ok(r#"{"result":"second"}"#.to_string()));
        block_on(call);
        assert_eq!(
            endpoint.snapshot().data.map(|g| g.result),
            Some("second".to_string())
        );
        assert_eq!(transport.seen.borrow().len(), 2);
    }

    #[test]
    fn test_overlapping_calls_last_resolution_wins() {
        let transport = Rc::new(ScriptedTransport::default());
        let endpoint = endpoint(&transport);

        let first_tx = transport.reply_later("first");
        let second_tx = transport.reply_later("second");
        let first = endpoint.start(payload("first"));
        let second = endpoint.start(payload("second"));

        let _ = second_tx.send(Ok(r#"{"result":"newer"}"#.to_string()));
        block_on(second);
        assert_eq!(
            endpoint.snapshot().data.map(|g| g.result),
            Some("newer".to_string())
        );

        // The earlier call resolves afterwards and overwrites the newer result
        let _ = first_tx.send(Ok(r#"{"result":"older"}"#.to_string()));
        block_on(first);
        assert_eq!(
            endpoint.snapshot().data.map(|g| g.result),
            Some("older".to_string())
        );
    }
}
