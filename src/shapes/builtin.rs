use indexmap::IndexMap;

use crate::foundation::core::DataArea;
use crate::shapes::registry::{ShapeCategory, ShapeVariation};

struct Def {
    key: &'static str,
    label: &'static str,
    description: &'static str,
    width: f64,
    height: f64,
    outline: &'static str,
    data: [f64; 3],
    bare: bool,
}

const SHIELDS: &[Def] = &[
    Def {
        key: "classic",
        label: "Classic",
        description: "Pointed heater shield with a peaked top",
        width: 300.0,
        height: 340.0,
        outline: "M150 10 L280 50 L280 170 C280 250 220 300 150 330 C80 300 20 250 20 170 L20 50 Z",
        data: [75.0, 80.0, 150.0],
        bare: false,
    },
    Def {
        key: "modern",
        label: "Modern",
        description: "Soft-cornered shield with a rounded point",
        width: 300.0,
        height: 340.0,
        outline: "M150 12 L276 44 Q284 46 284 54 L284 180 Q284 270 150 328 Q16 270 16 180 L16 54 Q16 46 24 44 Z",
        data: [80.0, 82.0, 140.0],
        bare: false,
    },
    Def {
        key: "kite",
        label: "Kite",
        description: "Tall faceted kite shield",
        width: 300.0,
        height: 360.0,
        outline: "M150 10 L285 60 L270 200 L150 350 L30 200 L15 60 Z",
        data: [85.0, 80.0, 130.0],
        bare: false,
    },
    Def {
        key: "crest",
        label: "Crest",
        description: "Wide crest with a dipped top edge",
        width: 320.0,
        height: 340.0,
        outline: "M20 20 Q160 60 300 20 L300 180 C300 260 230 310 160 330 C90 310 20 260 20 180 Z",
        data: [90.0, 85.0, 140.0],
        bare: false,
    },
];

const BADGES: &[Def] = &[
    Def {
        key: "circle",
        label: "Circle",
        description: "Round badge",
        width: 320.0,
        height: 320.0,
        outline: "M160 10 C242.84 10 310 77.16 310 160 C310 242.84 242.84 310 160 310 \
                  C77.16 310 10 242.84 10 160 C10 77.16 77.16 10 160 10 Z",
        data: [70.0, 70.0, 180.0],
        bare: false,
    },
    Def {
        key: "hexagon",
        label: "Hexagon",
        description: "Flat-topped hexagonal badge",
        width: 320.0,
        height: 300.0,
        outline: "M85 10 L235 10 L310 150 L235 290 L85 290 L10 150 Z",
        data: [90.0, 80.0, 140.0],
        bare: false,
    },
    Def {
        key: "octagon",
        label: "Octagon",
        description: "Octagonal seal",
        width: 320.0,
        height: 320.0,
        outline: "M100 10 L220 10 L310 100 L310 220 L220 310 L100 310 L10 220 L10 100 Z",
        data: [75.0, 75.0, 170.0],
        bare: false,
    },
];

const BASICS: &[Def] = &[
    Def {
        key: "square",
        label: "Square",
        description: "Plain square frame",
        width: 300.0,
        height: 300.0,
        outline: "M10 10 L290 10 L290 290 L10 290 Z",
        data: [40.0, 40.0, 220.0],
        bare: false,
    },
    Def {
        key: "rounded",
        label: "Rounded",
        description: "Square frame with rounded corners",
        width: 300.0,
        height: 300.0,
        outline: "M40 10 L260 10 Q290 10 290 40 L290 260 Q290 290 260 290 L40 290 \
                  Q10 290 10 260 L10 40 Q10 10 40 10 Z",
        data: [40.0, 40.0, 220.0],
        bare: false,
    },
    Def {
        key: "bare",
        label: "Bare",
        description: "No outline or effects, just the code on a panel",
        width: 260.0,
        height: 260.0,
        outline: "M0 0 L260 0 L260 260 L0 260 Z",
        data: [20.0, 20.0, 220.0],
        bare: true,
    },
];

fn category(label: &str, icon: &str, description: &str, defs: &[Def]) -> ShapeCategory {
    let variations: IndexMap<String, ShapeVariation> = defs
        .iter()
        .map(|d| {
            let [x, y, size] = d.data;
            (
                d.key.to_owned(),
                ShapeVariation {
                    label: d.label.to_owned(),
                    description: d.description.to_owned(),
                    width: d.width,
                    height: d.height,
                    outline: d.outline.to_owned(),
                    data_area: DataArea::new(x, y, size),
                    bare: d.bare,
                },
            )
        })
        .collect();
    ShapeCategory {
        label: label.to_owned(),
        icon: icon.to_owned(),
        description: description.to_owned(),
        variations,
    }
}

/// Built-in categories in presentation order.
pub(crate) fn builtin_categories() -> Vec<(&'static str, ShapeCategory)> {
    vec![
        (
            "shield",
            category("Shield", "🛡", "Heraldic shield silhouettes", SHIELDS),
        ),
        (
            "badge",
            category("Badge", "🏅", "Round and polygonal badges", BADGES),
        ),
        (
            "basic",
            category("Basic", "▢", "Plain frames and the bare code", BASICS),
        ),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/builtin.rs"]
mod tests;
