/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2024-2025 ByteDance and/or its affiliates.
 */

use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, anyhow};
use humanize_rs::ParseError;
use yaml_rust::Yaml;

use super::TlsTicketConfig;

impl TlsTicketConfig {
    /// Parse from a map, or from a single boolean to turn session tickets
    /// on or off with the default settings.
    pub fn parse_yaml(value: &Yaml) -> anyhow::Result<Self> {
        match value {
            Yaml::Hash(map) => {
                let mut config = TlsTicketConfig::default();
                for (k, v) in map.iter() {
                    let Yaml::String(k) = k else {
                        return Err(anyhow!("key in hash should be string"));
                    };
                    config
                        .set_by_yaml_kv(k, v)
                        .context(format!("failed to parse value of key {k}"))?;
                }
                config.check()?;
                Ok(config)
            }
            Yaml::Boolean(enable) => {
                let mut config = TlsTicketConfig::default();
                config.disabled = !*enable;
                Ok(config)
            }
            _ => Err(anyhow!(
                "yaml value type for 'tls ticket config' should be 'map' or 'boolean'"
            )),
        }
    }

    fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match normalize_key(k).as_str() {
            "rotate_interval" | "interval" => {
                self.rotate_interval =
                    as_duration(v).context("invalid humanize duration value")?;
                Ok(())
            }
            "num_tickets" | "keys_in_use" => {
                self.num_tickets = as_nonzero_usize(v)?;
                Ok(())
            }
            "disabled" | "session_tickets_disabled" => {
                self.disabled = as_bool(v)?;
                Ok(())
            }
            "enabled" | "enable" => {
                self.disabled = !as_bool(v)?;
                Ok(())
            }
            _ => Err(anyhow!("invalid key {k}")),
        }
    }
}

fn normalize_key(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

fn as_duration(v: &Yaml) -> anyhow::Result<Duration> {
    match v {
        Yaml::String(value) => match humanize_rs::duration::parse(value) {
            Ok(d) => Ok(d),
            Err(ParseError::MissingUnit) => {
                let secs = u64::from_str(value).map_err(|_| anyhow!("invalid duration string"))?;
                Ok(Duration::from_secs(secs))
            }
            Err(e) => Err(anyhow!("invalid humanize duration string: {e}")),
        },
        Yaml::Integer(value) => {
            let secs = u64::try_from(*value).map_err(|_| anyhow!("negative duration value"))?;
            Ok(Duration::from_secs(secs))
        }
        _ => Err(anyhow!(
            "yaml value type for humanize duration should be 'string' or 'integer'"
        )),
    }
}

fn as_nonzero_usize(v: &Yaml) -> anyhow::Result<NonZeroUsize> {
    match v {
        Yaml::String(s) => Ok(NonZeroUsize::from_str(s)?),
        Yaml::Integer(i) => {
            let u = usize::try_from(*i)?;
            NonZeroUsize::new(u).ok_or_else(|| anyhow!("value should not be zero"))
        }
        _ => Err(anyhow!(
            "yaml value type for 'nonzero usize' should be 'string' or 'integer'"
        )),
    }
}

fn as_bool(v: &Yaml) -> anyhow::Result<bool> {
    match v {
        Yaml::String(s) => match s.to_lowercase().as_str() {
            "on" | "true" | "yes" | "1" => Ok(true),
            "off" | "false" | "no" | "0" => Ok(false),
            _ => Err(anyhow!("invalid yaml string value for 'bool': {s}")),
        },
        Yaml::Boolean(b) => Ok(*b),
        Yaml::Integer(i) => Ok(*i != 0),
        _ => Err(anyhow!(
            "yaml value type for 'bool' should be 'boolean' / 'string' / 'integer'"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaml_rust::YamlLoader;

    fn yaml_doc(s: &str) -> Yaml {
        YamlLoader::load_from_str(s).unwrap().remove(0)
    }

    #[test]
    fn parse_map() {
        let yaml = yaml_doc(
            r#"
                rotate_interval: 1h30m
                num-tickets: 6
            "#,
        );
        let config = TlsTicketConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.rotate_interval(), Duration::from_secs(5400));
        assert_eq!(config.num_tickets().get(), 6);
        assert!(!config.session_tickets_disabled());

        let yaml = yaml_doc(
            r#"
                Interval: 600
                keys_in_use: "2"
                disabled: true
            "#,
        );
        let config = TlsTicketConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.rotate_interval(), Duration::from_secs(600));
        assert_eq!(config.num_tickets().get(), 2);
        assert!(config.session_tickets_disabled());

        let yaml = yaml_doc("enable: off");
        let config = TlsTicketConfig::parse_yaml(&yaml).unwrap();
        assert!(config.session_tickets_disabled());
    }

    #[test]
    fn parse_bool() {
        let config = TlsTicketConfig::parse_yaml(&Yaml::Boolean(true)).unwrap();
        assert_eq!(config, TlsTicketConfig::default());

        let config = TlsTicketConfig::parse_yaml(&Yaml::Boolean(false)).unwrap();
        assert!(config.session_tickets_disabled());
    }

    #[test]
    fn parse_err() {
        let yaml = yaml_doc("num_tickets: 0");
        assert!(TlsTicketConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc("num_tickets: -1");
        assert!(TlsTicketConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc("rotate_interval: 0");
        assert!(TlsTicketConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc("rotate_interval: 10x");
        assert!(TlsTicketConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc("lifetime: 10h");
        assert!(TlsTicketConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc("123: 1");
        assert!(TlsTicketConfig::parse_yaml(&yaml).is_err());

        assert!(TlsTicketConfig::parse_yaml(&Yaml::Integer(1)).is_err());
        assert!(TlsTicketConfig::parse_yaml(&Yaml::Array(vec![])).is_err());
        assert!(TlsTicketConfig::parse_yaml(&Yaml::Null).is_err());
    }

    #[test]
    fn duration_value() {
        let v = Yaml::String("10h".to_string());
        assert_eq!(as_duration(&v).unwrap(), Duration::from_secs(36000));

        let v = Yaml::String("90".to_string());
        assert_eq!(as_duration(&v).unwrap(), Duration::from_secs(90));

        let v = Yaml::Integer(-5);
        assert!(as_duration(&v).is_err());

        let v = Yaml::Real("1.5".to_string());
        assert!(as_duration(&v).is_err());
    }
}
