// Application layer: concrete adapters around the rules engine (http, key storage, export).

pub mod chat_client;
pub mod export;
pub mod key_store;
