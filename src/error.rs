//! Error types for loading descriptions and talking to the compile service.

use thiserror::Error;

use crate::graph::ComponentKind;

/// Why a description could not be read or restored.
#[derive(Error, Debug)]
pub enum DescriptionError {
	#[error("Malformed description: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("Connection {connection} refers to component {component}, but only {count} exist")]
	UnknownComponent {
		connection: usize,
		component: usize,
		count: usize,
	},

	#[error("Connection {index} starts at a {kind}, which has no start port")]
	NoStartPort { index: usize, kind: ComponentKind },

	#[error("Connection {index} ends at a {kind}, which has no end port")]
	NoEndPort { index: usize, kind: ComponentKind },

	#[error("Component {index} has no position")]
	MissingPosition { index: usize },
}

/// Failure of a catalog or compile request.
#[derive(Error, Debug)]
pub enum ServiceError {
	/// The request never produced a usable response.
	#[error("Request failed: {0}")]
	Transport(#[from] reqwest::Error),

	/// The service answered with a `message`.
	#[error("{message}")]
	Reported { message: String },

	#[error("Unexpected reply: {0}")]
	Malformed(#[from] serde_json::Error),
}

impl ServiceError {
	/// Human-readable lines for the terminal; reported messages are split on
	/// newlines and passed through verbatim.
	pub fn lines(&self) -> Vec<String> {
		match self {
			ServiceError::Reported { message } => message.split('\n').map(str::to_owned).collect(),
			other => vec![other.to_string()],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reported_message_lines_are_verbatim() {
		let err = ServiceError::Reported {
			message: "error: unknown function\n  at component 2".into(),
		};
		assert_eq!(err.lines(), vec!["error: unknown function", "  at component 2"]);
	}

	#[test]
	fn description_error_display() {
		let err = DescriptionError::NoEndPort {
			index: 1,
			kind: ComponentKind::Source,
		};
		assert_eq!(err.to_string(), "Connection 1 ends at a Source, which has no end port");
	}

	#[test]
	fn malformed_reply_is_one_line() {
		let err = ServiceError::from(serde_json::from_str::<u32>("nope").unwrap_err());
		assert_eq!(err.lines().len(), 1);
		assert!(err.lines()[0].starts_with("Unexpected reply"));
	}
}
