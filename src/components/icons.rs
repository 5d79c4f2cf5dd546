//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuChevronRight as ChevronRight, LuDownload as Download,
        LuFile as File, LuFileText as FileText, LuFolder as Folder, LuFolderPlus as NewFolder,
        LuHouse as Home, LuImage as FileImage, LuMove as Move, LuPencil as Edit,
        LuTrash2 as Delete, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronRight as ChevronRight, BsDownload as Download, BsFileEarmark as File,
        BsFileEarmarkImage as FileImage, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkText as FileText, BsFolderFill as Folder, BsFolderPlus as NewFolder,
        BsFolderSymlink as Move, BsHouseFill as Home, BsPencil as Edit, BsTrash as Delete,
        BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(NEW_FOLDER, NewFolder);
themed_icon!(UPLOAD, Upload);
themed_icon!(DOWNLOAD, Download);
themed_icon!(EDIT, Edit);
themed_icon!(MOVE, Move);
themed_icon!(DELETE, Delete);
themed_icon!(CLOSE, Close);
