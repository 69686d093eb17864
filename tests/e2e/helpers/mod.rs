use emotive_tts::controllers::tts::TtsController;
use emotive_tts::domain::tts::TtsService;
use emotive_tts::infrastructure::http::create_router;
use emotive_tts::infrastructure::repositories::{GoogleTtsRepository, OpenAiTtsRepository};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod api_client;

use api_client::TestClient;
use backend_stubs::{StubGoogleBackend, StubOpenAiBackend};

/// A running server wired to stub backends, one per test
pub struct TestContext {
    pub client: TestClient,
    pub google: Arc<StubGoogleBackend>,
    pub openai: Arc<StubOpenAiBackend>,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let google = Arc::new(StubGoogleBackend::new());
            let openai = Arc::new(StubOpenAiBackend::new());

            // Same wiring as main, with stubbed network calls
            let tts_service = Arc::new(TtsService::new(
                Arc::new(GoogleTtsRepository::new(google.clone())),
                Arc::new(OpenAiTtsRepository::new(openai.clone())),
            ));
            let app = create_router(Arc::new(TtsController::new(tts_service)));

            // Start server on an OS-assigned port
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                client: TestClient::new(&base_url),
                google,
                openai,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Server task ends with the test runtime
        }
    }
}
