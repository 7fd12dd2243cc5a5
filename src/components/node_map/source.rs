use std::future::Future;

use gloo_net::http::Request;
use log::debug;

use super::state::NodeMapError;
use super::types::{NodeRecord, parse_nodes};

/// Where node records come from.
pub trait NodeSource {
	fn fetch(&self) -> impl Future<Output = Result<Vec<NodeRecord>, NodeMapError>>;
}

/// `GET`s a JSON array of node records over HTTP.
///
/// The status code is not inspected; any body that parses as an array is
/// accepted.
pub struct HttpNodeSource {
	endpoint: String,
}

impl HttpNodeSource {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
		}
	}

	fn request_error(&self, source: gloo_net::Error) -> NodeMapError {
		NodeMapError::Request {
			endpoint: self.endpoint.clone(),
			source,
		}
	}
}

impl NodeSource for HttpNodeSource {
	async fn fetch(&self) -> Result<Vec<NodeRecord>, NodeMapError> {
		debug!("GET {}", self.endpoint);
		let response = Request::get(&self.endpoint)
			.send()
			.await
			.map_err(|e| self.request_error(e))?;
		debug!("{} answered {}", self.endpoint, response.status());
		let body = response.text().await.map_err(|e| self.request_error(e))?;
		Ok(parse_nodes(&body)?)
	}
}
