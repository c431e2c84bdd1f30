use iced::widget::{column, container, row, scrollable};
use iced::{window, Element, Length, Size, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod assets;
mod config;
mod error;
mod i18n;
mod state;
mod ui;

use assets::cache::{self, AssetCache};
use assets::resolver::{self, AssetFormat};
use assets::source::AssetSource;
use config::Config;
use i18n::Language;
use state::browse::Browse;
use state::data::{IndexItem, MetadataData, StyleFilter};
use state::index::IndexStore;
use state::prefs::Preferences;
use state::selection::{Selection, SelectionToken};

const DEFAULT_WINDOW_SIZE: Size = Size::new(1280.0, 860.0);

/// Main application state
struct IconBrowser {
    /// Where the index, metadata and icon files come from
    source: AssetSource,
    /// The catalog; empty until the startup load finishes
    index: Arc<IndexStore>,
    browse: Browse,
    selection: Selection,
    thumbnails: AssetCache,
    prefs: Preferences,
    language: Language,
    window_width: f32,
    /// Result of the last export, shown in the footer
    status: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Startup index load finished (empty store on failure)
    IndexLoaded(Arc<IndexStore>),
    /// The window was resized, or its initial size became known
    WindowResized(Size),
    SearchChanged(String),
    StyleFilterSelected(StyleFilter),
    PreviousPage,
    NextPage,
    /// User clicked an icon card
    IconSelected(IndexItem),
    /// Metadata request finished; `None` when it failed
    MetadataLoaded(SelectionToken, Option<MetadataData>),
    DetailsClosed,
    SizeSelected(u32),
    StyleSelected(String),
    /// An SVG for a card or the preview was fetched (or not)
    SvgLoaded(String, Option<Vec<u8>>),
    /// User clicked one of the download buttons
    Export(AssetFormat),
    /// Export finished; carries the saved path on success
    ExportFinished(Option<PathBuf>),
    LanguageToggled,
}

impl IconBrowser {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();

        let source = AssetSource::from_config(&config).unwrap_or_else(|e| {
            tracing::warn!(
                "⚠️  Invalid asset root {:?} ({}), falling back to ./public",
                config.asset_root,
                e
            );
            AssetSource::local(Config::default().asset_root)
        });

        let prefs = Preferences::new();
        let language = prefs.language();

        let index = Arc::new(IndexStore::default());
        let window_width = DEFAULT_WINDOW_SIZE.width;
        let browse = Browse::new(&index, ui::grid_width(window_width, false));

        tracing::info!("🎨 Fluent Icons starting with asset root {}", source.locate(""));

        let load_index = Task::perform(
            load_index(source.clone(), config.index_file.clone()),
            Message::IndexLoaded,
        );
        let initial_size = window::get_latest()
            .and_then(window::get_size)
            .map(Message::WindowResized);

        (
            IconBrowser {
                source,
                index,
                browse,
                selection: Selection::new(),
                thumbnails: AssetCache::new(),
                prefs,
                language,
                window_width,
                status: None,
            },
            Task::batch([load_index, initial_size]),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::IndexLoaded(index) => {
                if index.is_empty() {
                    tracing::warn!("⚠️  The icon catalog is empty");
                }
                self.index = index;
                self.browse.refilter(&self.index);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                self.relayout();
                Task::none()
            }
            Message::SearchChanged(term) => {
                self.browse.set_search_term(&self.index, term);
                Task::none()
            }
            Message::StyleFilterSelected(style) => {
                self.browse.set_style_filter(&self.index, style);
                Task::none()
            }
            Message::PreviousPage => {
                self.browse.previous_page();
                Task::none()
            }
            Message::NextPage => {
                self.browse.next_page();
                Task::none()
            }
            Message::IconSelected(icon) => {
                let was_open = self.selection.icon().is_some();
                let folder = icon.folder.clone();
                let token = self.selection.select(icon);
                if !was_open {
                    self.relayout();
                }

                Task::perform(load_metadata(self.source.clone(), folder), move |metadata| {
                    Message::MetadataLoaded(token, metadata)
                })
            }
            Message::MetadataLoaded(token, metadata) => {
                // A failed fetch leaves the panel loading
                if let Some(metadata) = metadata {
                    if !self.selection.apply_metadata(token, metadata) {
                        tracing::debug!("Discarded metadata for a superseded selection");
                    }
                }
                Task::none()
            }
            Message::DetailsClosed => {
                self.selection.clear();
                self.relayout();
                Task::none()
            }
            Message::SizeSelected(size) => {
                self.selection.set_size(size);
                Task::none()
            }
            Message::StyleSelected(style) => {
                self.selection.set_style(style);
                Task::none()
            }
            Message::SvgLoaded(path, bytes) => {
                self.thumbnails.finish(path, bytes);
                Task::none()
            }
            Message::Export(format) => self.export(format),
            Message::ExportFinished(saved) => {
                if let Some(path) = saved {
                    self.status = Some(format!("Saved {}", path.display()));
                }
                Task::none()
            }
            Message::LanguageToggled => {
                self.language = self.language.toggle();
                if let Err(e) = self.prefs.set_language(self.language) {
                    tracing::warn!("⚠️  Failed to save language preference: {}", e);
                }
                Task::none()
            }
        };

        Task::batch([task, self.request_visible_assets()])
    }

    /// Recompute the grid width after the window or panel changed size.
    /// The current page is left alone.
    fn relayout(&mut self) {
        let details_open = self.selection.icon().is_some();
        self.browse
            .resize(ui::grid_width(self.window_width, details_open));
    }

    /// Start fetching every SVG on screen that is not cached yet
    fn request_visible_assets(&mut self) -> Task<Message> {
        let mut paths: Vec<String> = self
            .browse
            .current_items()
            .iter()
            .map(resolver::thumbnail_path)
            .collect();

        if let Some(icon) = self.selection.icon() {
            paths.push(resolver::resolve_path(
                icon,
                self.selection.current_size(),
                self.selection.current_style(),
                AssetFormat::Svg,
            ));
        }

        let tasks: Vec<Task<Message>> = paths
            .into_iter()
            .filter(|path| self.thumbnails.begin(path))
            .map(|path| {
                Task::perform(cache::fetch_svg(self.source.clone(), path), |(path, bytes)| {
                    Message::SvgLoaded(path, bytes)
                })
            })
            .collect();

        Task::batch(tasks)
    }

    /// Ask where to save the selected icon, then write it in the background
    fn export(&mut self, format: AssetFormat) -> Task<Message> {
        let Some(icon) = self.selection.icon().cloned() else {
            return Task::none();
        };
        let size = self.selection.current_size();
        let style = self.selection.current_style().to_string();
        let file_name = resolver::file_name(&icon, size, &style, format);

        // Show the native save dialog
        let destination = FileDialog::new()
            .set_title(format!("Save {}", format))
            .set_file_name(&file_name)
            .add_filter(format.to_string(), &[format.extension()])
            .save_file();

        let Some(destination) = destination else {
            return Task::none();
        };

        Task::perform(
            assets::export::export_asset(
                self.source.clone(),
                icon,
                size,
                style,
                format,
                destination,
            ),
            move |result| match result {
                Ok(path) => Message::ExportFinished(Some(path)),
                Err(e) => {
                    tracing::warn!("⚠️  Export of {} failed: {}", file_name, e);
                    Message::ExportFinished(None)
                }
            },
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let main = column![
            ui::header::view(self.browse.search_term(), self.language),
            container(
                column![
                    ui::toolbar::view(
                        self.browse.style_filter(),
                        self.browse.filtered().len(),
                        self.language
                    ),
                    ui::grid::view(&self.browse, &self.thumbnails, self.language),
                ]
                .max_width(ui::MAX_CONTENT_WIDTH)
            )
            .center_x(Length::Fill)
            .padding([0.0, ui::CONTENT_PADDING]),
            ui::footer::view(
                self.index.last_updated(),
                self.status.as_deref(),
                self.language
            ),
        ];

        let main = scrollable(main).width(Length::Fill).height(Length::Fill);

        if self.selection.icon().is_some() {
            row![
                main,
                ui::details::view(&self.selection, &self.thumbnails, self.language)
            ]
            .into()
        } else {
            main.into()
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn title(&self) -> String {
        format!("{} ({} icons)", self.language.strings().title, self.browse.filtered().len())
    }
}

/// Load the index, logging and substituting an empty catalog on failure
async fn load_index(source: AssetSource, index_file: String) -> Arc<IndexStore> {
    let location = source.locate(&index_file);
    match IndexStore::load(source, index_file).await {
        Ok(index) => Arc::new(index),
        Err(e) => {
            tracing::error!("❌ Could not load icon index from {}: {}", location, e);
            Arc::new(IndexStore::default())
        }
    }
}

/// Fetch metadata, logging failures. `None` keeps the panel loading.
async fn load_metadata(source: AssetSource, folder: String) -> Option<MetadataData> {
    match assets::metadata::load_metadata(source, folder.clone()).await {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            tracing::warn!("⚠️  Failed to load metadata for {}: {}", folder, e);
            None
        }
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    iced::application(IconBrowser::title, IconBrowser::update, IconBrowser::view)
        .subscription(IconBrowser::subscription)
        .theme(IconBrowser::theme)
        .window_size(DEFAULT_WINDOW_SIZE)
        .centered()
        .run_with(IconBrowser::new)
}
