//! The persistence seam

use async_trait::async_trait;

use crate::profile::CompanyProfile;

/// Where a validated record goes when a save succeeds. The editor calls
/// this after the simulated latency and before entering
/// [`SaveStatus::Saved`](crate::SaveStatus::Saved); an `Err` transitions the
/// form to the error state instead.
///
/// Inject a real API client here; [`LogSink`] is the default stand-in.
#[async_trait]
pub trait SaveSink: Send + Sync {
	async fn save(&self, profile: &CompanyProfile) -> anyhow::Result<()>;
}

/// Default sink: logs the record and succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

#[async_trait]
impl SaveSink for LogSink {
	async fn save(&self, profile: &CompanyProfile) -> anyhow::Result<()> {
		tracing::info!(
			profile_id = %profile.id,
			company_name = %profile.company_name,
			"Saving profile"
		);
		Ok(())
	}
}
