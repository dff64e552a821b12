use clap::{Parser, Subcommand};
use shopfront::catalog::{self, CatalogItem, Category};
use shopfront::config::{self, SiteConfig};
use shopfront::forms::{self, Fields, FormDef, MailtoDelivery, NoEndpoint};
use shopfront::output::{self, RenderedFragment, TraceEvent};
use shopfront::render::{self, HtmlSink};
use shopfront::rotation::{DisplayItem, RotationController};
use shopfront::timer::Timeline;
use shopfront::view::{CatalogView, Filter};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(about = "Headless interactivity engine for small storefront sites")]
#[command(long_about = "\
Headless interactivity engine for small storefront sites

Your catalog file is the data source. Products become filterable grids and a
featured strip; the site config drives the hero slideshow and testimonial
carousel.

Input files:

  catalog.toml    # [[products]] tables: id, name, price, description,
                  # image, category (falls back to the stock catalog)
  site.toml       # slideshow, testimonials, featured strip, contact form
                  # (all optional; stock defaults apply)

Rendered fragments (the render command):

  dist/
  ├── featured.html              # First N products, catalog order
  ├── products-all.html          # The whole catalog as a grid
  ├── products-electronics.html  # One grid per category
  ├── products-fashion.html
  ├── hero.html                  # Slideshow markup, first slide active
  └── testimonials.html          # Quote carousel markup

Run 'shopfront gen-config' or 'shopfront gen-catalog' for documented
starting points.")]
#[command(version)]
struct Cli {
    /// Site configuration file
    #[arg(long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Product catalog file (the stock catalog is used if absent)
    #[arg(long, default_value = "catalog.toml", global = true)]
    catalog: PathBuf,

    /// Output directory for rendered fragments
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate config and catalog without rendering
    Check,
    /// Print the catalog inventory
    Catalog {
        /// Only products with this category tag ("all" for everything)
        #[arg(long, default_value = "all")]
        category: String,
        /// Print as JSON instead of the inventory listing
        #[arg(long)]
        json: bool,
    },
    /// Render HTML fragments from the catalog and config
    Render,
    /// Drive a rotation on a virtual timeline and print the trace
    Rotate {
        /// Number of intervals to simulate
        #[arg(long, default_value_t = 8)]
        ticks: u32,
        /// Rotate the testimonial quotes instead of the hero slides
        #[arg(long)]
        testimonials: bool,
    },
    /// Validate a form submission and run the delivery fallback
    Submit {
        /// Which form to submit (contact or newsletter)
        #[arg(long, default_value = "contact")]
        form: String,
        /// Field value as name=value (repeatable)
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Print a stock site.toml with all options documented
    GenConfig,
    /// Print a stock catalog.toml with the sample products
    GenCatalog,
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{s}'"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let config = config::load_config(&cli.config)?;
            let catalog = load_catalog_or_stock(&cli.catalog)?;
            output::print_catalog(&catalog);
            println!(
                "Slideshow: {} slides every {}ms",
                config.slideshow.slides.len(),
                config.slideshow.interval_ms
            );
            println!(
                "Testimonials: {} quotes every {}ms",
                config.testimonials.quotes.len(),
                config.testimonials.interval_ms
            );
            println!("==> Content is valid");
        }
        Command::Catalog { category, json } => {
            let catalog = load_catalog_or_stock(&cli.catalog)?;
            let mut view = CatalogView::new(&catalog, |_: &[&CatalogItem]| {});
            if category != "all" {
                view.set_filter(Filter::category(category.clone()));
            }
            let items: Vec<CatalogItem> =
                view.visible().iter().map(|item| (*item).clone()).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else if items.is_empty() {
                println!("No products in category '{category}'");
            } else {
                output::print_catalog(&items);
            }
        }
        Command::Render => {
            let config = config::load_config(&cli.config)?;
            let catalog = load_catalog_or_stock(&cli.catalog)?;
            std::fs::create_dir_all(&cli.output)?;
            let fragments = render_fragments(&config, &catalog, &cli.output)?;
            output::print_render_summary(&fragments);
            println!("==> Render complete: {}", cli.output.display());
        }
        Command::Rotate { ticks, testimonials } => {
            let config = config::load_config(&cli.config)?;
            let (labels, interval_ms) = if testimonials {
                (
                    config
                        .testimonials
                        .quotes
                        .iter()
                        .map(|q| q.quote.clone())
                        .collect::<Vec<_>>(),
                    config.testimonials.interval_ms,
                )
            } else {
                (config.slideshow.slides.clone(), config.slideshow.interval_ms)
            };
            let items: Vec<DisplayItem> = labels.into_iter().map(DisplayItem::new).collect();
            match RotationController::new(items, Duration::from_millis(interval_ms)) {
                Err(err) => println!("Rotation disabled: {err}"),
                Ok(mut ctrl) => {
                    let mut timeline = Timeline::new();
                    ctrl.start(&mut timeline);
                    let mut events = Vec::new();
                    for _ in 0..ticks {
                        for tick in timeline.advance(Duration::from_millis(interval_ms)) {
                            if ctrl.handle_tick(tick) {
                                events.push(TraceEvent {
                                    at_ms: timeline.now().as_millis() as u64,
                                    index: ctrl.current(),
                                    len: ctrl.len(),
                                    label: ctrl.active_item().label().to_string(),
                                });
                            }
                        }
                    }
                    ctrl.destroy(&mut timeline);
                    output::print_rotation_trace(&events);
                }
            }
        }
        Command::Submit { form, fields } => {
            let config = config::load_config(&cli.config)?;
            let def = match form.as_str() {
                "contact" => FormDef::contact(),
                "newsletter" => FormDef::newsletter(),
                other => return Err(format!("unknown form '{other}'").into()),
            };
            let mut fields: Fields = fields.into_iter().collect();
            let mut primary = NoEndpoint;
            let mut fallback =
                MailtoDelivery::new(config.contact.recipient.as_str(), |url: &str| {
                    println!("Open: {url}");
                    true
                });
            match forms::submit(&def, &mut fields, &mut primary, &mut fallback) {
                Ok(notice) => println!("{notice}"),
                Err(err) => println!("Please correct the form: {err}"),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenCatalog => {
            print!("{}", catalog::stock_catalog_toml());
        }
    }

    Ok(())
}

/// Load the catalog file, or fall back to the stock catalog when the file
/// does not exist (a fresh checkout should render out of the box).
fn load_catalog_or_stock(path: &Path) -> Result<Vec<CatalogItem>, catalog::CatalogError> {
    if path.exists() {
        catalog::load_catalog(path)
    } else {
        println!("No catalog at {}, using the stock catalog", path.display());
        Ok(catalog::stock_catalog())
    }
}

/// Write every fragment the site needs and report what was written.
fn render_fragments(
    config: &SiteConfig,
    catalog: &[CatalogItem],
    output_dir: &Path,
) -> Result<Vec<RenderedFragment>, std::io::Error> {
    let mut fragments = Vec::new();

    let sink = HtmlSink::new();
    let mut view = CatalogView::new(catalog, sink.callback());

    // Featured strip: a catalog-order prefix, independent of any filter.
    let featured = view.featured(config.featured.count);
    let refs: Vec<&CatalogItem> = featured.iter().collect();
    let path = output_dir.join("featured.html");
    std::fs::write(&path, render::product_grid(&refs).into_string())?;
    fragments.push(RenderedFragment::new(
        "featured",
        format!("{} products", featured.len()),
        &path,
    ));

    // Full grid, then one grid per category, all through the view's render
    // callback — the same path a filter click takes on the page.
    view.refresh();
    let path = output_dir.join("products-all.html");
    std::fs::write(&path, sink.html())?;
    fragments.push(RenderedFragment::new(
        "products-all",
        format!("{} products", catalog.len()),
        &path,
    ));

    for category in Category::ALL {
        view.set_filter(Filter::category(category.tag()));
        let name = format!("products-{}", category.tag());
        let path = output_dir.join(format!("{name}.html"));
        std::fs::write(&path, sink.html())?;
        fragments.push(RenderedFragment::new(
            &name,
            format!("{} products", view.visible().len()),
            &path,
        ));
    }

    // Hero slideshow: the controller owns the active flags; render its items
    // with slide 0 active. An empty slide list disables the feature.
    let slides: Vec<DisplayItem> = config
        .slideshow
        .slides
        .iter()
        .map(|caption| DisplayItem::new(caption.clone()))
        .collect();
    match RotationController::new(slides, Duration::from_millis(config.slideshow.interval_ms)) {
        Ok(ctrl) => {
            let path = output_dir.join("hero.html");
            std::fs::write(&path, render::hero_slides(ctrl.items()).into_string())?;
            fragments.push(RenderedFragment::new(
                "hero",
                format!("{} slides", ctrl.len()),
                &path,
            ));
        }
        Err(err) => println!("Slideshow disabled: {err}"),
    }

    let quotes = &config.testimonials.quotes;
    if quotes.is_empty() {
        println!("Testimonials disabled: no quotes configured");
    } else {
        let path = output_dir.join("testimonials.html");
        std::fs::write(
            &path,
            render::testimonial_quotes(quotes, 0).into_string(),
        )?;
        fragments.push(RenderedFragment::new(
            "testimonials",
            format!("{} quotes", quotes.len()),
            &path,
        ));
    }

    Ok(fragments)
}
