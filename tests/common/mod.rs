//
//  app-directory
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

#![allow(dead_code)]

use app_directory::config::ClientConfigBuilder;
use app_directory::{ClientConfig, DirectoryClient};
use mockito::{Mock, ServerGuard};
use serde_json::Value;

/// A client for `server` that ignores the process environment.
pub fn client(server: &ServerGuard) -> DirectoryClient {
    client_with(server, |b| b)
}

pub fn admin_client(server: &ServerGuard) -> DirectoryClient {
    client_with(server, |b| b.api_key("admin-key"))
}

pub fn client_with(
    server: &ServerGuard,
    configure: impl FnOnce(ClientConfigBuilder) -> ClientConfigBuilder,
) -> DirectoryClient {
    let config = configure(ClientConfig::builder().base_url(server.url()))
        .build_with_env(|_| None)
        .unwrap();
    DirectoryClient::new(config).unwrap()
}

/// Starts a mock answering with a JSON body.
pub fn json_mock(server: &mut ServerGuard, method: &str, path: &str, status: usize, body: Value) -> Mock {
    server
        .mock(method, path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
}
