//! Editor settings fixed at build time.

/// Where the compile/catalog service listens unless overridden.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8081";

#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	/// Base URL of the compile and catalog service, without trailing slash.
	pub service_url: String,
	/// Download name of a saved workspace.
	pub save_file_name: String,
	/// Download name of a compiled artifact.
	pub artifact_file_name: String,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			service_url: DEFAULT_SERVICE_URL.to_owned(),
			save_file_name: "stream".to_owned(),
			artifact_file_name: "compiled".to_owned(),
		}
	}
}

impl EditorConfig {
	/// Defaults, with `STREAM_EDITOR_SERVICE_URL` taken from the build
	/// environment when set.
	pub fn from_build_env() -> Self {
		let mut config = Self::default();
		if let Some(url) = option_env!("STREAM_EDITOR_SERVICE_URL") {
			config.service_url = url.trim_end_matches('/').to_owned();
		}
		config
	}

	pub fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.service_url, path.trim_start_matches('/'))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoint_joins_with_single_slash() {
		let config = EditorConfig::default();
		assert_eq!(config.endpoint("/compile"), "http://127.0.0.1:8081/compile");
		assert_eq!(config.endpoint("packages"), "http://127.0.0.1:8081/packages");
	}
}
