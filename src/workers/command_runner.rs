use std::path::PathBuf;
use std::time::{Duration, Instant};
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{ViaError, ViaResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::classifier_gateway::ClassifierGateway;
use crate::services::risk_rules::RiskRules;
use crate::services::screening_assistant::ScreeningAssistant;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::config::Config;

const MAX_IMAGE_REF_DISPLAY: usize = 60;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> ViaResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Classify { image, json, model_url, timeout } => {
                self.classify_command(&image, json, model_url, timeout).await
            }
            Commands::Rules => self.rules_command(),
            Commands::Ask { question, context } => self.ask_command(&question, context.as_deref()).await,
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> ViaResult<Config> {
        ConfigManager::load(self.config_path.as_deref()).map_err(|e| {
            log::error!("❌ Failed to load configuration: {}", e);
            e
        })
    }

    fn init_command(&self) -> ViaResult<()> {
        log::info!("🚀 Initializing via-screen configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        println!("✅ Configuration file created at {}", path.display());
        println!("🔧 Run 'via-screen validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> ViaResult<()> {
        let config = self.load_config()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                println!("✅ Configuration is valid");
                println!("   Model endpoint: {}", config.gateway.model_url);
                println!("   Timeout: {}s", config.gateway.timeout_secs);
                println!("   Token variables: {}", config.gateway.api_key_env.join(", "));
                Ok(())
            }
            Err(errors) => Err(ViaError::multiple(errors, "configuration validation")),
        }
    }

    async fn classify_command(
        &self,
        image: &str,
        json: bool,
        model_url: Option<String>,
        timeout: Option<u64>,
    ) -> ViaResult<()> {
        let mut config = self.load_config()?;
        if let Some(model_url) = model_url {
            config.gateway.model_url = model_url;
        }
        if let Some(timeout) = timeout {
            config.gateway.timeout_secs = timeout;
        }
        ConfigManager::validate_config(&config).map_err(|errors| ViaError::multiple(errors, "classify"))?;

        let request = AnalysisRequest::from_cli_input(image)
            .map_err(|e| ViaError::file_error(image, "read image", &e.to_string()))?;

        let gateway = ClassifierGateway::from_config(&config);
        log::info!("🌐 Model endpoint: {}", gateway.model_url());
        if !gateway.has_credential() {
            log::warn!("⚠️ No inference token found in {}", config.gateway.api_key_env.join(", "));
        }

        let result = if json {
            gateway.classify(request).await
        } else {
            let mut spinner = AnimatedLogger::new("🔬 Analyzing image".to_string());
            spinner.start();
            let result = gateway.classify(request).await;
            if result.is_degraded() {
                spinner.warn("Analysis did not produce a clinical finding").await;
            } else {
                spinner.stop("Analysis complete").await;
            }
            result
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            Self::print_result(&result, Duration::from_secs(config.gateway.timeout_secs));
        }

        Ok(())
    }

    fn print_result(result: &AnalysisResult, timeout: Duration) {
        let image_ref: String = if result.image_ref.chars().count() > MAX_IMAGE_REF_DISPLAY {
            let head: String = result.image_ref.chars().take(MAX_IMAGE_REF_DISPLAY).collect();
            format!("{}…", head)
        } else {
            result.image_ref.clone()
        };

        println!();
        println!("🖼️  Image:          {}", image_ref);
        println!("🏷️  Label:          {}", result.label);
        println!("📊 Confidence:     {:.1}%", result.confidence);
        println!("{} Suspicion:      {}", result.suspicion_level.emoji(), result.suspicion_level);
        println!("💡 Recommendation: {}", result.recommendation);

        if let Some(summary) = &result.summary {
            println!("📝 Model summary:  {}", summary);
        }

        if let Some(detail) = &result.error_detail {
            println!("🔍 Detail:         {}", detail);
        }

        if result.is_degraded() {
            println!();
            println!("⚠️  This is not a clinical finding. Verify the image manually (timeout {}s).", timeout.as_secs());
        }
    }

    fn rules_command(&self) -> ViaResult<()> {
        let config = self.load_config()?;
        let rules = RiskRules::from_config(&config.rules);

        println!("📋 Suspicion rules (first match wins, default Low):");
        for (i, rule) in rules.rules().iter().enumerate() {
            println!("  {}. {} {:<6} ← {}", i + 1, rule.level.emoji(), rule.level, rule.keywords.join(", "));
        }
        Ok(())
    }

    async fn ask_command(&self, question: &str, context: Option<&str>) -> ViaResult<()> {
        let config = self.load_config()?;
        let assistant = ScreeningAssistant::from_config(&config.assistant);

        let answer = assistant.ask(question, context).await;
        println!("{}", answer);
        Ok(())
    }
}
