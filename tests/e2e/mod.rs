// End-to-end API tests for Emotive TTS
//
// Each test starts the real router on an ephemeral port. Network calls to
// Google Cloud TTS and OpenAI are replaced by in-process stub backends that
// record what they receive, so tests can assert the exact backend payloads
// and call counts. Stubs are per test, so tests run in parallel.

mod helpers;
mod test_catalogue;
mod test_health;
