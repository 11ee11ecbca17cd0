// Wed Jan 15 2026 - Alex

use super::args::{Args, Command, LayoutArgs, ListArgs, SizeofArgs};
use crate::config::Config;
use crate::types::{PrimitiveKind, SerializableLayout, TypeDatabase, TypeRegistry};
use crate::ui::display::LayoutRenderer;
use crate::utils::LoggingUtils;
use anyhow::{anyhow, bail, Context};
use colored::Colorize;
use itertools::Itertools;

pub struct CommandHandler {
    renderer: LayoutRenderer,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            renderer: LayoutRenderer::new(),
        }
    }

    pub fn execute(mut self, args: Args) -> anyhow::Result<()> {
        let config = self.load_config(&args)?;
        LoggingUtils::init_logger(LoggingUtils::level_from_str(&args.log_level), config.use_color);
        if !config.use_color {
            colored::control::set_override(false);
        }
        self.renderer = LayoutRenderer::new().with_color(config.use_color);

        let registry = self.load_registry(&args, config)?;

        match args.command {
            Command::Sizeof(sizeof_args) => self.handle_sizeof(&registry, sizeof_args),
            Command::Layout(layout_args) => self.handle_layout(&registry, layout_args),
            Command::List(list_args) => self.handle_list(&registry, list_args),
        }
    }

    fn load_config(&self, args: &Args) -> anyhow::Result<Config> {
        let mut config = match &args.config {
            Some(path) => Config::load(path).map_err(|e| anyhow!(e))?,
            None => Config::default(),
        };
        if args.no_color {
            config = config.with_color(false);
        }
        Ok(config)
    }

    // Pointer width precedence: command line, then database, then config.
    fn load_registry(&self, args: &Args, config: Config) -> anyhow::Result<TypeRegistry> {
        let database = match &args.defs {
            Some(path) => TypeDatabase::load(path)
                .with_context(|| format!("Failed to load type database {}", path.display()))?,
            None => TypeDatabase::default(),
        };

        let pointer_width = args
            .pointer_width
            .or(database.pointer_width)
            .unwrap_or(config.pointer_width);
        let config = config.with_pointer_width(pointer_width);
        config.validate().map_err(|e| anyhow!(e))?;

        let mut registry = TypeRegistry::from_config(&config)?;
        database
            .apply(&mut registry)
            .context("Failed to apply type database")?;
        log::debug!("Registry ready: {} aliases, {} aggregates", registry.aliases().count(), registry.aggregates().count());
        Ok(registry)
    }

    fn handle_sizeof(&self, registry: &TypeRegistry, args: SizeofArgs) -> anyhow::Result<()> {
        let mut unresolved = Vec::new();
        for name in &args.names {
            let size = registry.size_of(name);
            if size == 0 {
                unresolved.push(name.as_str());
            }
            println!("{}", self.renderer.render_size(name, size));
        }
        if !unresolved.is_empty() {
            bail!("Could not resolve: {}", unresolved.iter().join(", "));
        }
        Ok(())
    }

    fn handle_layout(&self, registry: &TypeRegistry, args: LayoutArgs) -> anyhow::Result<()> {
        if args.json {
            let layout = SerializableLayout::capture(registry, &args.name)
                .ok_or_else(|| anyhow!("{} is not a struct or union", args.name))?;
            println!("{}", layout.to_json(true)?);
        } else {
            let text = self
                .renderer
                .render_layout(registry, &args.name)
                .ok_or_else(|| anyhow!("{} is not a struct or union", args.name))?;
            println!("{}", text);
        }
        Ok(())
    }

    fn handle_list(&self, registry: &TypeRegistry, args: ListArgs) -> anyhow::Result<()> {
        if args.primitives {
            println!("{}", "Primitives".bold());
            for kind in PrimitiveKind::ALL {
                let spellings = registry
                    .catalog()
                    .spellings()
                    .filter(|(_, k)| *k == kind)
                    .map(|(name, _)| name)
                    .join(", ");
                println!("  {:<8} {:>2}  {}", kind.canonical_spelling(), registry.catalog().byte_size(kind), spellings);
            }
        }

        println!("{}", "Aliases".bold());
        for alias in registry.aliases() {
            println!("  {}", self.renderer.render_alias(alias, registry.size_of(&alias.name)));
        }

        println!("{}", "Aggregates".bold());
        for aggregate in registry.aggregates() {
            let label = format!("{} {}", aggregate.kind, aggregate.name);
            println!("  {}", self.renderer.render_size(&label, registry.size_of(&aggregate.name)));
        }
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
