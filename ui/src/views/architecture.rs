//! "Atelier North": architecture studio template.
//! Hero, selected work, recognition, and the studio's offices.

use dioxus::prelude::*;

use crate::components::{Footer, Reveal, TemplateNav};
use crate::core::content::{Award, Office, Project};
use crate::i18n::{use_i18n, Tr};

const HERO_KICKER: Tr = Tr::full("Architecture studio", "건축 스튜디오", "建筑工作室", "建築スタジオ");

const HERO_TITLE: Tr = Tr::full(
    "Quiet buildings for loud landscapes.",
    "소란한 풍경을 위한 조용한 건축.",
    "为喧闹的景观而设计的安静建筑。",
    "騒がしい風景のための静かな建築。",
);

const HERO_LEDE: Tr = Tr::full(
    "We design civic and residential buildings that defer to the weather, the grade, and the people who walk past them every day.",
    "우리는 날씨와 지형, 그리고 매일 그 앞을 지나는 사람들에게 양보하는 공공·주거 건축을 설계합니다.",
    "我们设计的公共与住宅建筑，始终谦让于天气、地势，以及每天路过它们的人。",
    "私たちは、天候や地形、そして毎日そばを通る人々に寄り添う公共・住宅建築を設計します。",
);

const WORK_TITLE: Tr = Tr::full("Selected work", "주요 프로젝트", "精选项目", "主なプロジェクト");
const AWARDS_TITLE: Tr = Tr::full("Recognition", "수상", "获奖", "受賞");
const OFFICES_TITLE: Tr = Tr::full("Offices", "오피스", "办公室", "オフィス");

static PROJECTS: [Project; 4] = [
    Project {
        title: Tr::full("Fjord House", "피오르 하우스", "峡湾住宅", "フィヨルドハウス"),
        location: "Tromsø",
        year: 2024,
    },
    Project {
        title: Tr::full("Tidewater Library", "타이드워터 도서관", "潮汐图书馆", "タイドウォーター図書館"),
        location: "Bergen",
        year: 2023,
    },
    Project {
        title: Tr::full("Granite Chapel", "화강암 채플", "花岗岩礼拜堂", "花崗岩のチャペル"),
        location: "Kirkenes",
        year: 2022,
    },
    Project {
        title: Tr::full("Larch Pavilion", "낙엽송 파빌리온", "落叶松展亭", "カラマツのパビリオン"),
        location: "Oslo",
        year: 2021,
    },
];

static AWARDS: [Award; 3] = [
    Award {
        title: Tr::full("Civic Building of the Year", "올해의 공공 건축상", "年度公共建筑奖", "シビック・ビルディング・オブ・ザ・イヤー"),
        org: "Nordic Architecture Forum",
        year: 2024,
    },
    Award {
        title: Tr::full("Timber Construction Prize", "목조 건축상", "木结构建筑奖", "木造建築賞"),
        org: "Treprisen",
        year: 2023,
    },
    Award {
        title: Tr::full("Emerging Studio Award", "신진 스튜디오상", "新锐工作室奖", "新進スタジオ賞"),
        org: "European Design Review",
        year: 2021,
    },
];

static OFFICES: [Office; 2] = [
    Office {
        city: Tr::full("Oslo", "오슬로", "奥斯陆", "オスロ"),
        address: "Drammensveien 4, 0255 Oslo",
    },
    Office {
        city: Tr::full("Tromsø", "트롬쇠", "特罗姆瑟", "トロムソ"),
        address: "Storgata 12, 9008 Tromsø",
    },
];

#[component]
pub fn Architecture() -> Element {
    let active = use_i18n()();

    rsx! {
        div { class: "template template--architecture",
            TemplateNav { brand: "Atelier North", accent: "accent-slate" }

            header { class: "hero",
                Reveal {
                    p { class: "hero__kicker", {HERO_KICKER.resolve(active)} }
                    h1 { class: "hero__title", {HERO_TITLE.resolve(active)} }
                    p { class: "hero__lede", {HERO_LEDE.resolve(active)} }
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {WORK_TITLE.resolve(active)} }
                }
                { PROJECTS.iter().enumerate().map(|(i, project)| rsx! {
                    Reveal {
                        key: "{project.location}-{project.year}",
                        delay_ms: (i as u32) * 80,
                        margin_px: -40,
                        article { class: "row",
                            h3 { class: "row__title", {project.title.resolve(active)} }
                            p { class: "row__meta", "{project.location} · {project.year}" }
                        }
                    }
                })}
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {AWARDS_TITLE.resolve(active)} }
                }
                { AWARDS.iter().enumerate().map(|(i, award)| rsx! {
                    Reveal {
                        key: "{award.org}-{award.year}",
                        delay_ms: (i as u32) * 80,
                        margin_px: -40,
                        article { class: "row row--compact",
                            h3 { class: "row__title", {award.title.resolve(active)} }
                            p { class: "row__meta", "{award.org} · {award.year}" }
                        }
                    }
                })}
            }

            section { class: "section section--split",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {OFFICES_TITLE.resolve(active)} }
                }
                div { class: "split",
                    { OFFICES.iter().map(|office| rsx! {
                        Reveal { key: "{office.address}", margin_px: -40,
                            article { class: "panel",
                                h3 { class: "panel__title", {office.city.resolve(active)} }
                                p { class: "panel__body", "{office.address}" }
                            }
                        }
                    })}
                }
            }

            Footer {}
        }
    }
}
