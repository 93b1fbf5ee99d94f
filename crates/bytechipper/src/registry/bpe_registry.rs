//! # BPE Registry

use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde_json::Value;
use spin::RwLock;

use crate::{BCError, BCResult, TextBpe, resources::ResourceLoader};

/// Global BPE registry.
static REGISTRY: OnceCell<RwLock<BpeRegistry>> = OnceCell::new();

/// Hook for registering [`BpeProvider`]s at link time.
///
/// # Example
///
/// ```rust,ignore
/// struct MyBpeProvider;
/// impl BpeProvider for MyBpeProvider { ... }
///
/// inventory::submit! {
///     BpeProviderInventoryHook::new(|| Arc::new(MyBpeProvider))
/// }
/// ```
pub struct BpeProviderInventoryHook {
    /// Builder function to create a new provider.
    pub builder: fn() -> Arc<dyn BpeProvider>,
}
inventory::collect!(BpeProviderInventoryHook);

impl BpeProviderInventoryHook {
    /// Create a new inventory hook.
    pub const fn new(builder: fn() -> Arc<dyn BpeProvider>) -> Self {
        Self { builder }
    }
}

/// Get the global BPE registry.
pub fn get_bpe_registry() -> &'static RwLock<BpeRegistry> {
    REGISTRY.get_or_init(|| RwLock::new(init_registry()))
}

fn init_registry() -> BpeRegistry {
    let mut registry = BpeRegistry::default();

    for hook in inventory::iter::<BpeProviderInventoryHook> {
        let provider = (hook.builder)();
        let name = provider.name();
        if let Err(err) = registry.register_provider(provider) {
            log::warn!("skipping BPE provider {name:?}: {err}");
        }
    }

    registry
}

/// Run a function with mutable access to the global BPE registry.
pub fn with_bpe_registry_mut<F, V>(func: F) -> V
where
    F: FnOnce(&mut BpeRegistry) -> V,
{
    let mut guard = get_bpe_registry().write();
    let registry = &mut *guard;
    func(registry)
}

/// Run a function with access to the global BPE registry.
pub fn with_bpe_registry<F, V>(func: F) -> V
where
    F: FnOnce(&BpeRegistry) -> V,
{
    let guard = get_bpe_registry().read();
    let registry = &*guard;
    func(registry)
}

/// List all entries in the global registry.
pub fn list_bpes() -> Vec<BpeListing> {
    with_bpe_registry(|r| r.list_providers())
}

/// Build a BPE from the global registry.
///
/// See [`BpeRegistry::build_bpe`].
pub fn build_bpe(
    name: &str,
    config: &Value,
    loader: &mut dyn ResourceLoader,
) -> BCResult<Arc<dyn TextBpe>> {
    let provider = with_bpe_registry(|r| r.find_provider(name).cloned())
        .ok_or_else(|| BCError::ResourceNotFound(name.to_string()))?;

    // The registry lock is not held while the entry loads its resources.
    provider.build_bpe(config, loader)
}

/// A listing entry for a registered [`BpeProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BpeListing {
    /// The registry name.
    pub name: String,

    /// A description of the entry.
    pub description: String,
}

/// A named, configurable [`TextBpe`] constructor.
pub trait BpeProvider: Sync + Send {
    /// The registry name; matched case-insensitively.
    fn name(&self) -> String;

    /// Get an extended description of the entry.
    fn description(&self) -> String;

    /// Build a [`TextBpe`].
    ///
    /// ## Arguments
    /// * `config` - entry-specific options; usually a JSON object.
    /// * `loader` - resolves any vocabulary/merge file references.
    fn build_bpe(
        &self,
        config: &Value,
        loader: &mut dyn ResourceLoader,
    ) -> BCResult<Arc<dyn TextBpe>>;
}

/// A dispatch table of [`BpeProvider`]s, keyed by name.
#[derive(Default)]
pub struct BpeRegistry {
    providers: Vec<Arc<dyn BpeProvider>>,
}

impl BpeRegistry {
    /// Get a reference to the registered providers.
    pub fn providers(&self) -> &[Arc<dyn BpeProvider>] {
        &self.providers
    }

    /// Find a provider by name.
    pub fn find_provider(
        &self,
        name: &str,
    ) -> Option<&Arc<dyn BpeProvider>> {
        self.providers
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Register a new [`BpeProvider`].
    ///
    /// ## Returns
    /// * `Ok(())` - on success,
    /// * `Err(BCError::DuplicatedResource)` - if a provider with the same name already exists
    pub fn register_provider(
        &mut self,
        provider: Arc<dyn BpeProvider>,
    ) -> BCResult<()> {
        let name = provider.name();
        if self.find_provider(&name).is_some() {
            return Err(BCError::DuplicatedResource(format!(
                "BPE provider with name '{name}' already exists",
            )));
        }
        log::debug!("registered BPE provider: {name}");
        self.providers.push(provider);
        Ok(())
    }

    /// Remove a [`BpeProvider`].
    ///
    /// ## Returns
    /// The removed provider, if any.
    pub fn remove_provider(
        &mut self,
        name: &str,
    ) -> Option<Arc<dyn BpeProvider>> {
        self.providers
            .iter()
            .position(|p| p.name().eq_ignore_ascii_case(name))
            .map(|i| self.providers.remove(i))
    }

    /// List all registered providers, in registration order.
    pub fn list_providers(&self) -> Vec<BpeListing> {
        self.providers
            .iter()
            .map(|p| BpeListing {
                name: p.name(),
                description: p.description(),
            })
            .collect()
    }

    /// Build a [`TextBpe`] by registry name.
    ///
    /// ## Returns
    /// * `Ok(bpe)` - on success.
    /// * `Err(BCError::ResourceNotFound)` - if no provider has that name.
    /// * `Err(e)` - on any construction error.
    pub fn build_bpe(
        &self,
        name: &str,
        config: &Value,
        loader: &mut dyn ResourceLoader,
    ) -> BCResult<Arc<dyn TextBpe>> {
        match self.find_provider(name) {
            Some(provider) => provider.build_bpe(config, loader),
            None => Err(BCError::ResourceNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        bpe::{format_token_ids, parse_token_ids},
        resources::LocalResourceLoader,
    };

    /// Encodes each byte as its own id.
    struct RawBytesBpe;

    impl TextBpe for RawBytesBpe {
        fn encode(
            &self,
            text: &str,
        ) -> BCResult<String> {
            let ids: Vec<u32> = text.bytes().map(u32::from).collect();
            Ok(format_token_ids(&ids))
        }

        fn decode(
            &self,
            text: &str,
        ) -> BCResult<String> {
            let bytes = parse_token_ids(text)?
                .into_iter()
                .map(|id| u8::try_from(id).map_err(|e| BCError::Parse(e.to_string())))
                .collect::<BCResult<Vec<u8>>>()?;
            String::from_utf8(bytes).map_err(|e| BCError::Parse(e.to_string()))
        }

        fn is_beginning_of_word(
            &self,
            token: &str,
        ) -> BCResult<bool> {
            Ok(self.decode(token)?.starts_with(' '))
        }
    }

    struct RawBytesProvider(&'static str);

    impl BpeProvider for RawBytesProvider {
        fn name(&self) -> String {
            self.0.to_string()
        }

        fn description(&self) -> String {
            "raw bytes".to_string()
        }

        fn build_bpe(
            &self,
            config: &Value,
            _loader: &mut dyn ResourceLoader,
        ) -> BCResult<Arc<dyn TextBpe>> {
            if config.get("fail").is_some() {
                return Err(BCError::InvalidOptions {
                    name: self.name(),
                    message: "asked to fail".to_string(),
                });
            }
            Ok(Arc::new(RawBytesBpe))
        }
    }

    #[test]
    fn test_register_find_remove() {
        let mut registry = BpeRegistry::default();
        registry
            .register_provider(Arc::new(RawBytesProvider("raw_bytes")))
            .unwrap();

        assert!(registry.find_provider("raw_bytes").is_some());
        assert!(registry.find_provider("RAW_Bytes").is_some());
        assert!(registry.find_provider("other").is_none());

        let err = registry
            .register_provider(Arc::new(RawBytesProvider("Raw_Bytes")))
            .unwrap_err();
        assert!(matches!(err, BCError::DuplicatedResource(_)));

        registry
            .register_provider(Arc::new(RawBytesProvider("second")))
            .unwrap();
        assert_eq!(
            registry.list_providers(),
            vec![
                BpeListing {
                    name: "raw_bytes".to_string(),
                    description: "raw bytes".to_string(),
                },
                BpeListing {
                    name: "second".to_string(),
                    description: "raw bytes".to_string(),
                },
            ]
        );

        assert!(registry.remove_provider("RAW_BYTES").is_some());
        assert!(registry.remove_provider("raw_bytes").is_none());
        assert_eq!(registry.providers().len(), 1);
    }

    #[test]
    fn test_build_bpe() {
        let mut registry = BpeRegistry::default();
        registry
            .register_provider(Arc::new(RawBytesProvider("raw_bytes")))
            .unwrap();

        let mut loader = LocalResourceLoader;

        let bpe = registry
            .build_bpe("raw_bytes", &json!({}), &mut loader)
            .unwrap();
        assert_eq!(bpe.encode("hi you").unwrap(), "104 105 32 121 111 117");
        assert_eq!(bpe.decode("104 105").unwrap(), "hi");
        assert!(bpe.is_beginning_of_word("32").unwrap());
        assert!(!bpe.is_beginning_of_word("104").unwrap());
        assert_eq!(
            bpe.encode_batch(&["a", "b c"]).unwrap(),
            vec!["97".to_string(), "98 32 99".to_string()]
        );
        assert_eq!(
            bpe.decode_batch(&["97", ""]).unwrap(),
            vec!["a".to_string(), String::new()]
        );

        assert!(matches!(
            registry.build_bpe("raw_bytes", &json!({"fail": true}), &mut loader),
            Err(BCError::InvalidOptions { .. })
        ));
        assert!(matches!(
            registry.build_bpe("missing", &json!({}), &mut loader),
            Err(BCError::ResourceNotFound(_))
        ));
    }

    #[test]
    fn test_global_registry() {
        with_bpe_registry_mut(|r| {
            r.register_provider(Arc::new(RawBytesProvider("test_global_raw_bytes")))
        })
        .unwrap();

        assert!(
            list_bpes()
                .iter()
                .any(|listing| listing.name == "test_global_raw_bytes")
        );

        let bpe = build_bpe("test_global_raw_bytes", &json!({}), &mut LocalResourceLoader).unwrap();
        assert_eq!(bpe.encode("A").unwrap(), "65");

        assert!(matches!(
            build_bpe("no_such_bpe", &json!({}), &mut LocalResourceLoader),
            Err(BCError::ResourceNotFound(_))
        ));

        with_bpe_registry_mut(|r| r.remove_provider("test_global_raw_bytes")).unwrap();
    }
}
