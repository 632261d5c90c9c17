// SVG icon loading.
//
// Icons are optional assets: a missing directory, file or unparsable SVG
// simply leaves that icon out of the set and every draw call for it becomes
// a no-op.

use ::image::{Rgb, RgbImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use crate::error::AppError;
use crate::theme::Swatch;

/// Resolution icons are rasterised at before embedding
pub const ICON_RASTER_DPI: f32 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Todo,
    Priorities,
    Notes,
    Schedule,
    Important,
    Goals,
    Calendar,
    Overview,
    Discovery,
}

impl Icon {
    pub const ALL: [Icon; 9] = [
        Icon::Todo,
        Icon::Priorities,
        Icon::Notes,
        Icon::Schedule,
        Icon::Important,
        Icon::Goals,
        Icon::Calendar,
        Icon::Overview,
        Icon::Discovery,
    ];

    /// Material Symbols file backing this icon.
    pub fn file_name(self) -> &'static str {
        match self {
            Icon::Todo => "add_task_24dp_E3E3E3_FILL0_wght400_GRAD0_opsz24.svg",
            Icon::Priorities => "bookmark_star_24dp_E3E3E3_FILL0_wght400_GRAD0_opsz24.svg",
            Icon::Notes => "event_list_24dp_E3E3E3_FILL0_wght400_GRAD0_opsz24.svg",
            Icon::Schedule => "schedule_24dp_E3E3E3_FILL0_wght400_GRAD0_opsz24.svg",
            Icon::Important => "notification_important_24dp_E3E3E3_FILL0_wght400_GRAD0_opsz24.svg",
            Icon::Goals => "bookmark_check_24dp_E3E3E3_FILL0_wght400_GRAD0_opsz24.svg",
            Icon::Calendar => "calendar_month_24dp_E3E3E3_FILL0_wght400_GRAD0_opsz24.svg",
            Icon::Overview => "date_range_24dp_E3E3E3_FILL0_wght400_GRAD0_opsz24.svg",
            Icon::Discovery => "list_alt_check_24dp_E3E3E3_FILL0_wght400_GRAD0_opsz24.svg",
        }
    }
}

/// Coverage of a rasterised icon, one byte per pixel, row-major.
#[derive(Debug)]
pub struct AlphaMask {
    pub width: u32,
    pub height: u32,
    pub alpha: Vec<u8>,
}

impl AlphaMask {
    /// Paint the mask in `color` over a solid `backdrop`.
    pub fn composite(&self, color: Swatch, backdrop: Swatch) -> RgbImage {
        let mut rgb_image = RgbImage::new(self.width, self.height);
        for (i, a) in self.alpha.iter().enumerate() {
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            let c = color.over(backdrop, *a as f32 / 255.0);
            rgb_image.put_pixel(x, y, Rgb([c.r, c.g, c.b]));
        }
        rgb_image
    }
}

/// The icons found on disk, parsed once and rasterised on demand.
pub struct IconSet {
    trees: HashMap<Icon, usvg::Tree>,
    masks: RefCell<HashMap<(Icon, u32), Rc<AlphaMask>>>,
}

impl IconSet {
    pub fn empty() -> Self {
        IconSet {
            trees: HashMap::new(),
            masks: RefCell::new(HashMap::new()),
        }
    }

    /// Load every known icon present in `dir`.
    pub fn load(dir: &Path) -> Self {
        let mut set = IconSet::empty();
        if !dir.is_dir() {
            tracing::info!("Icon directory {} not found, icons will be omitted", dir.display());
            return set;
        }

        for icon in Icon::ALL {
            let path = dir.join(icon.file_name());
            if !path.exists() {
                tracing::debug!("Icon {:?} missing at {}", icon, path.display());
                continue;
            }
            match load_tree(&path) {
                Ok(tree) => {
                    set.trees.insert(icon, tree);
                }
                Err(e) => tracing::debug!("Skipping icon {:?}: {}", icon, e),
            }
        }

        tracing::debug!("Loaded {} of {} icons", set.trees.len(), Icon::ALL.len());
        set
    }

    pub fn contains(&self, icon: Icon) -> bool {
        self.trees.contains_key(&icon)
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Square coverage mask of `icon`, `px` pixels on a side.
    pub fn mask(&self, icon: Icon, px: u32) -> Option<Rc<AlphaMask>> {
        if px == 0 {
            return None;
        }
        if let Some(mask) = self.masks.borrow().get(&(icon, px)) {
            return Some(mask.clone());
        }

        let tree = self.trees.get(&icon)?;
        let mask = Rc::new(rasterize(tree, px)?);
        self.masks.borrow_mut().insert((icon, px), mask.clone());
        Some(mask)
    }
}

fn load_tree(path: &Path) -> Result<usvg::Tree, AppError> {
    let data = std::fs::read(path)
        .map_err(|e| AppError::IconError(format!("{}: {}", path.display(), e)))?;
    usvg::Tree::from_data(&data, &usvg::Options::default())
        .map_err(|e| AppError::IconError(format!("{}: {}", path.display(), e)))
}

fn rasterize(tree: &usvg::Tree, px: u32) -> Option<AlphaMask> {
    let size = tree.size();
    let longest = size.width().max(size.height());
    if longest <= 0.0 {
        return None;
    }

    // Fit the longer side, centre the shorter one
    let scale = px as f32 / longest;
    let tx = (px as f32 - size.width() * scale) / 2.0;
    let ty = (px as f32 - size.height() * scale) / 2.0;

    let mut pixmap = Pixmap::new(px, px)?;
    resvg::render(
        tree,
        Transform::from_row(scale, 0.0, 0.0, scale, tx, ty),
        &mut pixmap.as_mut(),
    );

    let alpha = pixmap.data().chunks_exact(4).map(|p| p[3]).collect();
    Some(AlphaMask {
        width: px,
        height: px,
        alpha,
    })
}

/// Pixels needed to draw an icon `size_mm` wide at [`ICON_RASTER_DPI`].
pub fn raster_size(size_mm: f32) -> u32 {
    (size_mm / 25.4 * ICON_RASTER_DPI).round().max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{LABEL_COLOR, WHITE};

    const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><rect x="0" y="0" width="24" height="12" fill="#e3e3e3"/></svg>"##;

    #[test]
    fn test_missing_directory_gives_empty_set() {
        let set = IconSet::load(Path::new("definitely/not/here"));
        assert!(set.is_empty());
        assert!(set.mask(Icon::Calendar, 16).is_none());
    }

    #[test]
    fn test_loads_present_icons_only() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join(Icon::Calendar.file_name()), SQUARE_SVG).unwrap();
        std::fs::write(dir.path().join(Icon::Notes.file_name()), "not an svg").unwrap();

        let set = IconSet::load(dir.path());
        assert_eq!(set.len(), 1);
        assert!(set.contains(Icon::Calendar));
        assert!(!set.contains(Icon::Notes));
        assert!(!set.contains(Icon::Todo));
    }

    #[test]
    fn test_only_drawn_icons_are_loaded() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("today_24dp_E3E3E3_FILL0_wght400_GRAD0_opsz24.svg"), SQUARE_SVG).unwrap();
        assert!(IconSet::load(dir.path()).is_empty());

        let names: std::collections::HashSet<_> = Icon::ALL.iter().map(|i| i.file_name()).collect();
        assert_eq!(names.len(), Icon::ALL.len());
    }

    #[test]
    fn test_mask_covers_painted_half() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join(Icon::Calendar.file_name()), SQUARE_SVG).unwrap();
        let set = IconSet::load(dir.path());

        let mask = set.mask(Icon::Calendar, 24).expect("mask");
        assert_eq!(mask.alpha.len(), 24 * 24);
        // Top half painted, bottom half clear
        assert_eq!(mask.alpha[2 * 24 + 5], 255);
        assert_eq!(mask.alpha[20 * 24 + 5], 0);

        // Second request is served from the cache
        let again = set.mask(Icon::Calendar, 24).expect("mask");
        assert!(Rc::ptr_eq(&mask, &again));
    }

    #[test]
    fn test_composite_tints_over_backdrop() {
        let mask = AlphaMask {
            width: 2,
            height: 1,
            alpha: vec![255, 0],
        };
        let image = mask.composite(LABEL_COLOR, WHITE);
        assert_eq!(image.get_pixel(0, 0).0, [LABEL_COLOR.r, LABEL_COLOR.g, LABEL_COLOR.b]);
        assert_eq!(image.get_pixel(1, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_raster_size() {
        assert_eq!(raster_size(25.4), 200);
        assert_eq!(raster_size(0.0), 1);
    }
}
