use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub storage_driver: StorageDriver,
    pub local_upload_dir: String,
    pub s3_bucket: Option<String>,
    pub s3_region: String,
    pub s3_use_public_read_acl: bool,
    pub cdn_domain: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StorageDriver {
    Local,
    S3,
}

impl std::str::FromStr for StorageDriver {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s3" => Ok(StorageDriver::S3),
            // anything else, including absence, selects the local driver
            _ => Ok(StorageDriver::Local),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT: {}", e))?,
            storage_driver: env::var("STORAGE_DRIVER")
                .unwrap_or_else(|_| "local".to_string())
                .parse()?,
            local_upload_dir: env::var("LOCAL_UPLOAD_DIR")
                .unwrap_or_else(|_| "./uploads".to_string()),
            s3_bucket: env::var("S3_BUCKET_NAME").ok(),
            s3_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            s3_use_public_read_acl: env::var("S3_USE_PUBLIC_READ_ACL")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
            cdn_domain: env::var("CDN_DOMAIN").ok(),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.storage_driver == StorageDriver::S3 && self.s3_bucket.is_none() {
            return Err(anyhow::anyhow!(
                "S3_BUCKET_NAME must be set for the s3 storage driver"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_parsing_defaults_to_local() {
        assert_eq!("local".parse::<StorageDriver>().unwrap(), StorageDriver::Local);
        assert_eq!("".parse::<StorageDriver>().unwrap(), StorageDriver::Local);
        assert_eq!("s3".parse::<StorageDriver>().unwrap(), StorageDriver::S3);
        assert_eq!("S3".parse::<StorageDriver>().unwrap(), StorageDriver::S3);
        // any unrecognized value falls back to the local driver
        assert_eq!("gcs".parse::<StorageDriver>().unwrap(), StorageDriver::Local);
    }

    #[test]
    fn validate_requires_bucket_for_s3() {
        let config = Config {
            database_url: "postgres://localhost/gallery".to_string(),
            server_port: 3000,
            storage_driver: StorageDriver::S3,
            local_upload_dir: "./uploads".to_string(),
            s3_bucket: None,
            s3_region: "us-east-1".to_string(),
            s3_use_public_read_acl: false,
            cdn_domain: None,
        };
        assert!(config.validate().is_err());

        let config = Config {
            s3_bucket: Some("gallery-bucket".to_string()),
            ..config
        };
        assert!(config.validate().is_ok());
    }
}
