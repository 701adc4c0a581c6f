//! The template gallery index: entries, categories, and the category filter.

use crate::i18n::Tr;

/// Category tags a template can carry. A template may carry several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Architecture,
    Agency,
    Saas,
    Hospitality,
    Commerce,
    Portfolio,
    Editorial,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Architecture,
        Category::Agency,
        Category::Saas,
        Category::Hospitality,
        Category::Commerce,
        Category::Portfolio,
        Category::Editorial,
    ];

    pub fn label(self) -> Tr {
        match self {
            Category::Architecture => Tr::full("Architecture", "건축", "建筑", "建築"),
            Category::Agency => Tr::full("Agency", "에이전시", "创意机构", "エージェンシー"),
            Category::Saas => Tr::full("SaaS", "SaaS", "SaaS", "SaaS"),
            Category::Hospitality => {
                Tr::full("Hospitality", "호스피탈리티", "餐饮酒店", "ホスピタリティ")
            }
            Category::Commerce => Tr::full("Commerce", "커머스", "商业", "コマース"),
            Category::Portfolio => Tr::full("Portfolio", "포트폴리오", "作品集", "ポートフォリオ"),
            Category::Editorial => Tr::full("Editorial", "에디토리얼", "编辑出版", "エディトリアル"),
        }
    }
}

/// Index-page filter state: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

/// One card on the gallery index.
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry {
    /// Stable identifier; platform crates map it to their route enums.
    pub slug: &'static str,
    /// Brand name as-is (brand names are not localized).
    pub name: &'static str,
    pub tagline: Tr,
    pub categories: &'static [Category],
    /// Accent class token applied to the card.
    pub accent: &'static str,
}

pub const GALLERY: [TemplateEntry; 9] = [
    TemplateEntry {
        slug: "atelier-north",
        name: "Atelier North",
        tagline: Tr::full("Architecture studio", "건축 스튜디오", "建筑工作室", "建築スタジオ"),
        categories: &[Category::Architecture, Category::Portfolio],
        accent: "accent-slate",
    },
    TemplateEntry {
        slug: "studio-pulse",
        name: "Studio Pulse",
        tagline: Tr::full("Creative agency", "크리에이티브 에이전시", "创意机构", "クリエイティブエージェンシー"),
        categories: &[Category::Agency],
        accent: "accent-coral",
    },
    TemplateEntry {
        slug: "driftkit",
        name: "Driftkit",
        tagline: Tr::full("SaaS landing page", "SaaS 랜딩 페이지", "SaaS 落地页", "SaaS ランディングページ"),
        categories: &[Category::Saas],
        accent: "accent-indigo",
    },
    TemplateEntry {
        slug: "maison-verre",
        name: "Maison Verre",
        tagline: Tr::full("Seasonal restaurant", "시즌 레스토랑", "时令餐厅", "シーズナルレストラン"),
        categories: &[Category::Hospitality],
        accent: "accent-olive",
    },
    TemplateEntry {
        slug: "aurelia",
        name: "Aurelia",
        tagline: Tr::full("Jewelry brand", "주얼리 브랜드", "珠宝品牌", "ジュエリーブランド"),
        categories: &[Category::Commerce],
        accent: "accent-gold",
    },
    TemplateEntry {
        slug: "halftone",
        name: "Halftone",
        tagline: Tr::full("Photography portfolio", "사진 포트폴리오", "摄影作品集", "写真ポートフォリオ"),
        categories: &[Category::Portfolio],
        accent: "accent-ink",
    },
    TemplateEntry {
        slug: "ledger-review",
        name: "The Ledger Review",
        tagline: Tr::full("Editorial magazine", "에디토리얼 매거진", "编辑杂志", "エディトリアルマガジン"),
        categories: &[Category::Editorial],
        accent: "accent-oxblood",
    },
    TemplateEntry {
        slug: "form-and-field",
        name: "Form & Field",
        tagline: Tr::full("Interior design studio", "인테리어 디자인 스튜디오", "室内设计工作室", "インテリアデザインスタジオ"),
        categories: &[Category::Architecture, Category::Commerce],
        accent: "accent-clay",
    },
    TemplateEntry {
        slug: "ember-roastery",
        name: "Ember Roastery",
        tagline: Tr::full("Coffee roastery", "커피 로스터리", "咖啡烘焙坊", "コーヒーロースタリー"),
        categories: &[Category::Hospitality, Category::Commerce],
        accent: "accent-ember",
    },
];

/// Applies the index-page filter. `All` passes the list through unchanged;
/// a category keeps exactly the entries tagged with it, in their original
/// relative order.
pub fn filter_entries(
    entries: &[TemplateEntry],
    filter: CategoryFilter,
) -> Vec<&TemplateEntry> {
    entries
        .iter()
        .filter(|entry| match filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => entry.categories.contains(&category),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_passes_the_full_list_through() {
        let entries = filter_entries(&GALLERY, CategoryFilter::All);
        assert_eq!(entries.len(), GALLERY.len());
        assert_eq!(entries.len(), 9);
    }

    #[test]
    fn exactly_one_entry_is_agency_only() {
        let entries = filter_entries(&GALLERY, CategoryFilter::Only(Category::Agency));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].slug, "studio-pulse");
        assert_eq!(entries[0].categories, &[Category::Agency][..]);
    }

    #[test]
    fn category_filter_keeps_exact_subset() {
        let entries = filter_entries(&GALLERY, CategoryFilter::Only(Category::Hospitality));
        let slugs: Vec<_> = entries.iter().map(|e| e.slug).collect();
        assert_eq!(slugs, vec!["maison-verre", "ember-roastery"]);

        for entry in &GALLERY {
            let kept = entries.iter().any(|e| e.slug == entry.slug);
            assert_eq!(kept, entry.categories.contains(&Category::Hospitality));
        }
    }

    #[test]
    fn filtering_preserves_original_relative_order() {
        for category in Category::ALL {
            let entries = filter_entries(&GALLERY, CategoryFilter::Only(category));
            let positions: Vec<_> = entries
                .iter()
                .map(|e| GALLERY.iter().position(|g| g.slug == e.slug).unwrap())
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted, "order broken for {category:?}");
        }
    }

    #[test]
    fn every_category_matches_at_least_one_entry() {
        for category in Category::ALL {
            assert!(
                !filter_entries(&GALLERY, CategoryFilter::Only(category)).is_empty(),
                "no gallery entry tagged {category:?}"
            );
        }
    }

    #[test]
    fn slugs_are_unique_and_url_safe() {
        for (i, entry) in GALLERY.iter().enumerate() {
            assert!(entry
                .slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-'));
            for other in &GALLERY[i + 1..] {
                assert_ne!(entry.slug, other.slug);
            }
        }
    }

    #[test]
    fn gallery_copy_is_fully_translated() {
        for entry in &GALLERY {
            assert!(
                entry.tagline.is_complete(),
                "tagline for {} is missing a translation",
                entry.slug
            );
        }
        for category in Category::ALL {
            assert!(category.label().is_complete());
        }
    }
}
