//! Full lifecycle test against a live server.
//!
//! # Design
//! Starts the server on a random port with an in-memory store and a canned
//! summarizer, then drives every client operation over real HTTP using ureq,
//! feeding results through `ViewState` the way a UI would.

use async_trait::async_trait;
use todo_core::{
    Action, ApiError, HttpMethod, HttpRequest, HttpResponse, Submission, TodoClient, ViewState,
};
use todo_server::{AppState, MemoryStore, SummarizeError, Summarizer};

struct CannedSummarizer;

#[async_trait]
impl Summarizer for CannedSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizeError> {
        let items = prompt.lines().skip(1).count();
        Ok(format!("  {items} things to do  "))
    }
}

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's status-code-as-error behavior so 4xx/5xx responses come
/// back as data and the core client interprets them.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Patch, Some(body)) => agent
            .patch(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Patch, None) => agent.patch(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            let router = todo_server::app(AppState::new(MemoryStore::new(), CannedSummarizer));
            todo_server::run(listener, router).await
        })
        .unwrap();
    });

    addr
}

/// Run the request the current input maps to and fold the result into state.
fn submit(client: &TodoClient, state: ViewState) -> ViewState {
    match state.submission() {
        Err(alert) => state.apply(Action::Rejected(alert)),
        Ok(Submission::Create(input)) => {
            let req = client.build_create_todo(&input).unwrap();
            match client.parse_create_todo(execute(req)) {
                Ok(todo) => state.apply(Action::Created(todo)),
                Err(_) => state.apply(Action::CreateFailed),
            }
        }
        Ok(Submission::Update(id, input)) => {
            let req = client.build_update_todo(id, &input).unwrap();
            match client.parse_update_todo(execute(req)) {
                Ok(todo) => state.apply(Action::Updated(todo)),
                Err(_) => state.apply(Action::UpdateFailed),
            }
        }
    }
}

#[test]
fn crud_lifecycle() {
    let addr = start_server();
    let client = TodoClient::new(&format!("http://{addr}"));

    // Step 1: fetch — empty.
    let mut state = ViewState::new().apply(Action::FetchStarted);
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    state = state.apply(Action::FetchSucceeded(todos));
    assert!(state.todos.is_empty());
    assert!(!state.loading);

    // Step 2: summarize with nothing stored — server refuses.
    let err = client.parse_summarize(execute(client.build_summarize())).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(ref m) if m == "No todos found to summarize."));

    // Step 3: blank submit is refused locally.
    state = submit(&client, state.apply(Action::InputChanged("   ".to_string())));
    assert!(state.alert.is_some());
    state = state.apply(Action::AlertDismissed);

    // Step 4: create two items.
    for text in ["Buy milk", "Walk dog"] {
        state = submit(&client, state.apply(Action::InputChanged(text.to_string())));
    }
    assert_eq!(state.todos.len(), 2);
    assert!(state.input.is_empty());
    let first = state.todos[0].id;
    let second = state.todos[1].id;
    assert!(second > first);

    // Step 5: the server rejects blank text too.
    let req = client
        .build_create_todo(&todo_core::CreateTodo { text: " ".to_string() })
        .unwrap();
    let err = client.parse_create_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    // Step 6: edit the first item.
    state = state.apply(Action::EditStarted {
        id: first,
        text: state.todos[0].text.clone(),
    });
    state = submit(&client, state.apply(Action::InputChanged("Buy oat milk".to_string())));
    assert!(!state.edit.is_edit);
    assert_eq!(state.todos[0].text, "Buy oat milk");

    // Step 7: server summary follows creation order, trimmed.
    let summary = client.parse_summarize(execute(client.build_summarize())).unwrap();
    assert_eq!(summary, "2 things to do");

    // Step 8: list from the server matches local state.
    let listed = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(listed, state.todos);

    // Step 9: delete.
    let message = client
        .parse_delete_todo(execute(client.build_delete_todo(first)))
        .unwrap();
    assert_eq!(message, "Todo deleted successfully");
    state = state.apply(Action::Deleted(first));

    // Step 10: update/delete again — NotFound.
    let req = client
        .build_update_todo(first, &todo_core::UpdateTodo { text: "gone".to_string() })
        .unwrap();
    assert!(matches!(
        client.parse_update_todo(execute(req)).unwrap_err(),
        ApiError::NotFound
    ));
    assert!(matches!(
        client.parse_delete_todo(execute(client.build_delete_todo(first))).unwrap_err(),
        ApiError::NotFound
    ));

    // Step 11: list — only the second item remains.
    let listed = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(listed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![second]);
    assert_eq!(listed, state.todos);
}
