use std::env::VarError;
use std::ffi::OsString;

use super::*;

#[test]
fn token_is_used_when_set() {
	let credentials = credentials_from_env(Ok("ghp_secret".to_string()));
	assert!(!credentials.is_anonymous());
}

#[test]
fn missing_token_is_anonymous() {
	assert!(credentials_from_env(Err(VarError::NotPresent)).is_anonymous());
}

#[test]
fn empty_token_is_anonymous() {
	assert!(credentials_from_env(Ok(String::new())).is_anonymous());
}

#[test]
fn non_utf8_token_is_ignored() {
	assert!(credentials_from_env(Err(VarError::NotUnicode(OsString::from("token")))).is_anonymous());
}
