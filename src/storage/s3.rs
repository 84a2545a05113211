use super::backend::{make_key, StorageBackend, StorageError};
use super::mime;
use crate::config::Config;
use async_trait::async_trait;

#[cfg(feature = "s3")]
use aws_config::BehaviorVersion;
#[cfg(feature = "s3")]
use aws_sdk_s3::{primitives::ByteStream, types::ObjectCannedAcl};

/// Stored objects are immutable (keys are never reused), so clients and
/// CDNs may cache them for a year.
const CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// S3-backed storage. The client is built once at construction and shared
/// by all in-flight uploads.
#[derive(Debug)]
pub struct S3Storage {
    bucket: String,
    region: String,
    use_public_acl: bool,
    cdn_domain: Option<String>,
    #[cfg(feature = "s3")]
    client: aws_sdk_s3::Client,
}

impl S3Storage {
    /// Build the backend. A missing bucket name is a configuration error
    /// raised here, before any client or network work.
    pub async fn new(config: &Config) -> Result<Self, StorageError> {
        let bucket = config.s3_bucket.clone().ok_or_else(|| {
            StorageError::Configuration(
                "S3_BUCKET_NAME must be set for the s3 storage driver".to_string(),
            )
        })?;
        let region = config.s3_region.clone();

        #[cfg(not(feature = "s3"))]
        {
            let _ = (bucket, region);
            return Err(StorageError::Configuration(
                "binary was built without the \"s3\" feature".to_string(),
            ));
        }

        #[cfg(feature = "s3")]
        {
            let sdk_config = aws_config::defaults(BehaviorVersion::latest())
                .region(aws_config::Region::new(region.clone()))
                .load()
                .await;

            Ok(S3Storage {
                bucket,
                region,
                use_public_acl: config.s3_use_public_read_acl,
                cdn_domain: config.cdn_domain.clone(),
                client: aws_sdk_s3::Client::new(&sdk_config),
            })
        }
    }
}

#[async_trait]
impl StorageBackend for S3Storage {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        mime_type: Option<&str>,
        folder: &str,
        name_base: &str,
    ) -> Result<String, StorageError> {
        let ext = mime::extension_fuzzy(mime_type);
        let key = make_key(folder, name_base, &ext)?;

        #[cfg(feature = "s3")]
        {
            let content_type = mime_type.unwrap_or("application/octet-stream");

            let mut request = self
                .client
                .put_object()
                .bucket(&self.bucket)
                .key(&key)
                .body(ByteStream::from(bytes))
                .content_type(content_type)
                .cache_control(CACHE_CONTROL);

            if self.use_public_acl {
                request = request.acl(ObjectCannedAcl::PublicRead);
            }

            request
                .send()
                .await
                .map_err(|e| StorageError::Backend(Box::new(e)))?;

            Ok(key)
        }

        #[cfg(not(feature = "s3"))]
        {
            let _ = (bytes, key);
            Err(StorageError::Configuration(
                "binary was built without the \"s3\" feature".to_string(),
            ))
        }
    }

    fn public_url_from_key(&self, key: &str) -> String {
        public_url(&self.bucket, &self.region, self.cdn_domain.as_deref(), key)
    }
}

/// URL derivation, kept free of the client so it stays a pure function of
/// key and configuration. A CDN domain overrides the bucket URL entirely;
/// otherwise virtual-hosted style, with the historical `us-east-1` special
/// case of the region-less `s3.amazonaws.com` host.
fn public_url(bucket: &str, region: &str, cdn_domain: Option<&str>, key: &str) -> String {
    if let Some(cdn) = cdn_domain {
        return format!("https://{}/{}", cdn, key);
    }
    let host = if region == "us-east-1" {
        "s3.amazonaws.com".to_string()
    } else {
        format!("s3.{}.amazonaws.com", region)
    };
    format!("https://{}.{}/{}", bucket, host, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, StorageDriver};

    fn s3_config(bucket: Option<&str>) -> Config {
        Config {
            database_url: "postgres://localhost/gallery".to_string(),
            server_port: 3000,
            storage_driver: StorageDriver::S3,
            local_upload_dir: "./uploads".to_string(),
            s3_bucket: bucket.map(str::to_string),
            s3_region: "us-east-1".to_string(),
            s3_use_public_read_acl: false,
            cdn_domain: None,
        }
    }

    #[tokio::test]
    async fn missing_bucket_is_a_configuration_error() {
        let err = S3Storage::new(&s3_config(None)).await.unwrap_err();
        assert!(matches!(err, StorageError::Configuration(_)));
    }

    #[test]
    fn us_east_1_uses_the_bare_s3_host() {
        assert_eq!(
            public_url("gallery-bucket", "us-east-1", None, "Fotos_Perfil/u_42-1.png"),
            "https://gallery-bucket.s3.amazonaws.com/Fotos_Perfil/u_42-1.png"
        );
    }

    #[test]
    fn other_regions_use_the_regional_host() {
        assert_eq!(
            public_url("gallery-bucket", "eu-west-1", None, "k.png"),
            "https://gallery-bucket.s3.eu-west-1.amazonaws.com/k.png"
        );
    }

    #[test]
    fn cdn_domain_overrides_bucket_and_region() {
        assert_eq!(
            public_url("gallery-bucket", "eu-west-1", Some("cdn.example.com"), "k.png"),
            "https://cdn.example.com/k.png"
        );
    }

    #[test]
    fn url_derivation_is_pure() {
        let a = public_url("b", "us-east-1", None, "f/x-1.png");
        let b = public_url("b", "us-east-1", None, "f/x-1.png");
        assert_eq!(a, b);
    }
}
