// Test modules for hf-extract-relay
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on business logic verification.
// HTTP-level tests against a mock chat API live in tests/.

// Test helper utilities
pub mod helpers;

pub mod chat_types;
