//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap Icons so components never name a
//! concrete glyph.

use icondata::Icon;

pub const LOGO: Icon = icondata::BsFileEarmarkText;
pub const SUN: Icon = icondata::BsSun;
pub const MOON: Icon = icondata::BsMoon;
pub const REPOSITORY: Icon = icondata::BsGithub;
pub const COPY: Icon = icondata::BsClipboard;
pub const COPIED: Icon = icondata::BsClipboardCheck;
pub const DOWNLOAD: Icon = icondata::BsDownload;
pub const SPINNER: Icon = icondata::BsArrowRepeat;
