use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub upload: UploadConfig,
    pub export: ExportConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Limits applied to calibration file uploads
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Maximum accepted payload size in bytes
    pub max_file_size: usize,
    /// Accepted file extensions, lowercase and without the leading dot
    pub allowed_extensions: Vec<String>,
}

/// Labels written into the JSON export document
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub platform: String,
    pub version: String,
    /// Filename suggested to the client via Content-Disposition
    pub filename: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            upload: UploadConfig::from_env()?,
            export: ExportConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl UploadConfig {
    const DEFAULT_MAX_FILE_SIZE: usize = 50 * 1024 * 1024; // 50MB
    const DEFAULT_ALLOWED_EXTENSIONS: &'static str = "xdf,bin,a2l";

    pub fn from_env() -> Result<Self, String> {
        let max_file_size = env::var("MAX_UPLOAD_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_FILE_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_UPLOAD_SIZE must be a valid number".to_string())?;

        let raw = env::var("ALLOWED_EXTENSIONS")
            .unwrap_or_else(|_| Self::DEFAULT_ALLOWED_EXTENSIONS.to_string());
        let allowed_extensions = Self::parse_extensions(&raw);

        if allowed_extensions.is_empty() {
            return Err("ALLOWED_EXTENSIONS must list at least one extension".to_string());
        }

        Ok(Self {
            max_file_size,
            allowed_extensions,
        })
    }

    /// Normalize a comma-separated extension list (".XDF, bin" -> ["xdf", "bin"])
    fn parse_extensions(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|s| s.trim().trim_start_matches('.').to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: Self::DEFAULT_MAX_FILE_SIZE,
            allowed_extensions: Self::parse_extensions(Self::DEFAULT_ALLOWED_EXTENSIONS),
        }
    }
}

impl ExportConfig {
    const DEFAULT_PLATFORM: &'static str = "BMW ME9.2 Steuergeräte Platform";
    const DEFAULT_VERSION: &'static str = "1.0";
    const DEFAULT_FILENAME: &'static str = "bmw-me9-export.json";

    pub fn from_env() -> Result<Self, String> {
        let platform =
            env::var("EXPORT_PLATFORM").unwrap_or_else(|_| Self::DEFAULT_PLATFORM.to_string());
        let version =
            env::var("EXPORT_VERSION").unwrap_or_else(|_| Self::DEFAULT_VERSION.to_string());
        let filename =
            env::var("EXPORT_FILENAME").unwrap_or_else(|_| Self::DEFAULT_FILENAME.to_string());

        if filename.contains('"') {
            return Err("EXPORT_FILENAME must not contain quotes".to_string());
        }

        Ok(Self {
            platform,
            version,
            filename,
        })
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            platform: Self::DEFAULT_PLATFORM.to_string(),
            version: Self::DEFAULT_VERSION.to_string(),
            filename: Self::DEFAULT_FILENAME.to_string(),
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "ECU Central API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "API documentation for the BMW ECU calibration file platform".to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
