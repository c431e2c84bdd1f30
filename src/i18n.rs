/// Display language and the built-in UI labels
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// Value stored in the preferences database
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Parse a stored value. Anything but `en` or `zh` is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }

    /// Pick a language from a BCP 47 locale such as "zh-CN" or "en-US"
    pub fn from_locale(locale: &str) -> Self {
        if locale.to_ascii_lowercase().starts_with("zh") {
            Language::Zh
        } else {
            Language::En
        }
    }

    /// Language of the operating system
    pub fn system() -> Self {
        sys_locale::get_locale()
            .map(|locale| Self::from_locale(&locale))
            .unwrap_or_default()
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Zh => &ZH,
        }
    }
}

impl fmt::Display for Language {
    /// Name of the language in that language, for the toggle button
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("English"),
            Language::Zh => f.write_str("中文"),
        }
    }
}

pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub search_placeholder: &'static str,
    pub all_styles: &'static str,
    pub regular: &'static str,
    pub filled: &'static str,
    pub icons_found: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub page: &'static str,
    pub of: &'static str,
    pub icon_details: &'static str,
    pub loading_metadata: &'static str,
    pub select_preview_size: &'static str,
    pub select_style: &'static str,
    pub download_assets: &'static str,
    pub download_svg: &'static str,
    pub download_png: &'static str,
    pub download_pdf: &'static str,
    pub attributes: &'static str,
    pub keywords: &'static str,
    pub metaphors: &'static str,
    pub last_sync: &'static str,
    pub close: &'static str,
}

static EN: Strings = Strings {
    title: "Fluent Icons",
    subtitle: "Browse and download the Fluent UI system icons",
    search_placeholder: "Search icons by name or keyword...",
    all_styles: "All styles",
    regular: "Regular",
    filled: "Filled",
    icons_found: "icons found",
    previous: "Previous",
    next: "Next",
    page: "Page",
    of: "of",
    icon_details: "Icon details",
    loading_metadata: "Loading metadata...",
    select_preview_size: "Size",
    select_style: "Style",
    download_assets: "Download",
    download_svg: "Download SVG",
    download_png: "Download PNG",
    download_pdf: "Download PDF",
    attributes: "Attributes",
    keywords: "Keywords",
    metaphors: "Metaphors",
    last_sync: "Last sync",
    close: "Close",
};

static ZH: Strings = Strings {
    title: "Fluent 图标",
    subtitle: "浏览并下载 Fluent UI 系统图标",
    search_placeholder: "按名称或关键词搜索图标...",
    all_styles: "全部样式",
    regular: "线性",
    filled: "填充",
    icons_found: "个图标",
    previous: "上一页",
    next: "下一页",
    page: "第",
    of: "页 / 共",
    icon_details: "图标详情",
    loading_metadata: "正在加载元数据...",
    select_preview_size: "尺寸",
    select_style: "样式",
    download_assets: "下载",
    download_svg: "下载 SVG",
    download_png: "下载 PNG",
    download_pdf: "下载 PDF",
    attributes: "属性",
    keywords: "关键词",
    metaphors: "隐喻",
    last_sync: "最后同步",
    close: "关闭",
};
