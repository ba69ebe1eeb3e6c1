//! Client for the compile and package-catalog service.
//!
//! Both calls are fire-and-forget from the editor's point of view: their
//! results only feed display lists and downloads, never the graph.

use log::{error, info};
use serde::Deserialize;

use crate::config::EditorConfig;
use crate::error::ServiceError;
use crate::graph::Description;

/// Installed packages and the functions usable by components and conditions.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Catalog {
	pub packages: Vec<String>,
	pub functions: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogReply {
	Failure { message: String },
	Listing(Catalog),
}

#[derive(Deserialize)]
struct FailureReply {
	message: String,
}

/// Parse a `GET /packages` body.
pub fn parse_catalog(body: &str) -> Result<Catalog, ServiceError> {
	match serde_json::from_str::<CatalogReply>(body)? {
		CatalogReply::Failure { message } => Err(ServiceError::Reported { message }),
		CatalogReply::Listing(catalog) => Ok(catalog),
	}
}

/// Parse the body of a failed `POST /compile`.
pub fn parse_failure(body: &str) -> ServiceError {
	match serde_json::from_str::<FailureReply>(body) {
		Ok(reply) => ServiceError::Reported {
			message: reply.message,
		},
		Err(e) => ServiceError::Malformed(e),
	}
}

#[derive(Clone, Debug)]
pub struct ServiceClient {
	http: reqwest::Client,
	config: EditorConfig,
}

impl ServiceClient {
	pub fn new(config: EditorConfig) -> Self {
		Self {
			http: reqwest::Client::new(),
			config,
		}
	}

	pub async fn catalog(&self) -> Result<Catalog, ServiceError> {
		let url = self.config.endpoint("packages");
		let body = self.http.get(&url).send().await?.text().await?;
		let catalog = parse_catalog(&body)?;
		info!(
			"catalog lists {} packages and {} functions",
			catalog.packages.len(),
			catalog.functions.len()
		);
		Ok(catalog)
	}

	/// Submit the position-free description; returns the compiled artifact.
	pub async fn compile(&self, description: &Description) -> Result<Vec<u8>, ServiceError> {
		let url = self.config.endpoint("compile");
		let response = self.http.post(&url).json(description).send().await?;
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await?;
			error!("compile rejected with {status}");
			return Err(parse_failure(&body));
		}
		let artifact = response.bytes().await?;
		info!("compiled artifact of {} bytes", artifact.len());
		Ok(artifact.to_vec())
	}
}
