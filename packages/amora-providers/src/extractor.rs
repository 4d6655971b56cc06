use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::Value;

use amora_config::ExtractorProviderConfig;
use amora_domain::profile::TraitProfile;

const SYSTEM_PROMPT: &str = "\
You analyze a dating-profile biography and respond with strict JSON only, \
shaped as {\"personality_traits\": {\"<trait>\": <0..1>}, \"interests\": \
[\"<keyword>\"], \"values\": [\"<keyword>\"]}. Use lowercase keywords. \
Respond with {\"personality_traits\": {}, \"interests\": [], \"values\": []} \
when the text carries no usable signal.";

/// Derives a trait profile from biography text via an OpenAI-compatible
/// chat-completions endpoint.
///
/// Callers own the degradation policy: an `Err` here is expected to be
/// replaced with the default empty profile, never surfaced to the user.
pub async fn extract(cfg: &ExtractorProviderConfig, bio: &str) -> Result<TraitProfile> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let messages = serde_json::json!([
		{ "role": "system", "content": SYSTEM_PROMPT },
		{ "role": "user", "content": bio },
	]);

	for _ in 0..3 {
		let body = serde_json::json!({
			"model": cfg.model,
			"temperature": cfg.temperature,
			"messages": messages,
		});
		let res = client
			.post(&url)
			.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
			.json(&body)
			.send()
			.await?;
		let json: Value = res.error_for_status()?.json().await?;
		if let Ok(profile) = parse_extractor_json(json) {
			return Ok(profile);
		}
	}

	Err(eyre::eyre!("Extractor response is not a valid trait profile."))
}

fn parse_extractor_json(json: Value) -> Result<TraitProfile> {
	if let Some(content) = json
		.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str())
	{
		let parsed: TraitProfile = serde_json::from_str(content)
			.map_err(|_| eyre::eyre!("Extractor content is not a valid trait profile."))?;

		return Ok(sanitize(parsed));
	}

	// Some gateways unwrap the envelope and return the object directly.
	if json.is_object() {
		let parsed: TraitProfile = serde_json::from_value(json)
			.map_err(|_| eyre::eyre!("Extractor response is not a valid trait profile."))?;

		return Ok(sanitize(parsed));
	}

	Err(eyre::eyre!("Extractor response is missing JSON content."))
}

/// Clamps intensities into `[0, 1]` and drops blank keywords; the model's
/// output is untrusted.
fn sanitize(profile: TraitProfile) -> TraitProfile {
	let mut clean = TraitProfile::default();

	for (name, intensity) in profile.personality_traits {
		let name = name.trim().to_string();

		if name.is_empty() || !intensity.is_finite() {
			continue;
		}

		clean.personality_traits.insert(name, intensity.clamp(0.0, 1.0));
	}
	for keyword in profile.interests {
		let keyword = keyword.trim().to_string();

		if !keyword.is_empty() {
			clean.interests.insert(keyword);
		}
	}
	for keyword in profile.values {
		let keyword = keyword.trim().to_string();

		if !keyword.is_empty() {
			clean.values.insert(keyword);
		}
	}

	clean
}
