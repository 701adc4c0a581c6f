//! "Halftone": photography portfolio template.
//! Hero, ongoing series, exhibitions, and a contact note.

use dioxus::prelude::*;

use crate::components::{Footer, Reveal, TemplateNav};
use crate::core::content::{Feature, Project};
use crate::i18n::{use_i18n, Tr};

const HERO_KICKER: Tr = Tr::full("Photography", "사진", "摄影", "写真");

const HERO_TITLE: Tr = Tr::full(
    "Pictures of places just after everyone left.",
    "모두가 떠난 직후의 장소들.",
    "人群刚刚散去之后的地方。",
    "人々が去った直後の場所たち。",
);

const HERO_LEDE: Tr = Tr::full(
    "Large-format work on empty infrastructure: ferry terminals at dawn, stadiums in the off-season, server halls between shifts.",
    "비어 있는 기반시설을 담은 대형 포맷 작업 — 새벽의 페리 터미널, 비시즌의 경기장, 교대 사이의 서버홀.",
    "以大画幅拍摄空置的基础设施：黎明的渡轮码头、休赛期的体育场、换班间隙的机房。",
    "空の社会基盤を大判で撮る — 夜明けのフェリーターミナル、オフシーズンのスタジアム、シフトの合間のサーバーホール。",
);

const SERIES_TITLE: Tr = Tr::full("Ongoing series", "진행 중인 시리즈", "进行中的系列", "進行中のシリーズ");
const SHOWS_TITLE: Tr = Tr::full("Exhibitions", "전시", "展览", "展示");
const CONTACT_TITLE: Tr = Tr::full("Prints & commissions", "프린트와 커미션", "收藏与委托", "プリントとコミッション");

const CONTACT_BODY: Tr = Tr::full(
    "Editions of eight, printed and framed in-house. For commissions, write with a place and a month; the light does the scheduling.",
    "8점 한정 에디션, 인화와 액자 모두 자체 제작. 커미션은 장소와 달을 적어 보내 주세요 — 일정은 빛이 정합니다.",
    "每幅限量八版，馆内放印与装裱。委托拍摄请注明地点与月份——日程由光线决定。",
    "各8点のエディション、プリントと額装は自家製作。コミッションは場所と月を添えてご連絡を。予定を決めるのは光です。",
);

static SERIES: [Project; 3] = [
    Project {
        title: Tr::full("Terminal Light", "터미널 라이트", "码头之光", "ターミナルライト"),
        location: "Baltic coast",
        year: 2025,
    },
    Project {
        title: Tr::full("Closed Season", "클로즈드 시즌", "休赛期", "クローズドシーズン"),
        location: "Ruhr valley",
        year: 2024,
    },
    Project {
        title: Tr::full("Hum", "험", "嗡鸣", "ハム"),
        location: "Reykjanes",
        year: 2023,
    },
];

static SHOWS: [Feature; 3] = [
    Feature {
        title: Tr::full("Fotomuseum Winterthur", "포토뮤지엄 빈터투어", "温特图尔摄影博物馆", "フォトムゼウム・ヴィンタートゥール"),
        body: Tr::full("Group show, spring 2025.", "그룹전, 2025년 봄.", "群展，2025 年春。", "グループ展、2025年春。"),
    },
    Feature {
        title: Tr::full("Seoul Lunar Photo", "서울 루나 포토", "首尔月相摄影节", "ソウル・ルナ・フォト"),
        body: Tr::full("Festival selection, 2024.", "페스티벌 선정, 2024.", "入选影展，2024 年。", "フェスティバル選出、2024年。"),
    },
    Feature {
        title: Tr::full("Galerie Hartmann", "갤러리 하르트만", "哈特曼画廊", "ギャラリー・ハルトマン"),
        body: Tr::full("Solo show, autumn 2023.", "개인전, 2023년 가을.", "个展，2023 年秋。", "個展、2023年秋。"),
    },
];

#[component]
pub fn Photography() -> Element {
    let active = use_i18n()();

    rsx! {
        div { class: "template template--photography",
            TemplateNav { brand: "Halftone", accent: "accent-ink" }

            header { class: "hero",
                Reveal {
                    p { class: "hero__kicker", {HERO_KICKER.resolve(active)} }
                    h1 { class: "hero__title", {HERO_TITLE.resolve(active)} }
                    p { class: "hero__lede", {HERO_LEDE.resolve(active)} }
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {SERIES_TITLE.resolve(active)} }
                }
                { SERIES.iter().enumerate().map(|(i, series)| rsx! {
                    Reveal {
                        key: "{series.location}-{series.year}",
                        delay_ms: (i as u32) * 80,
                        margin_px: -40,
                        article { class: "row",
                            h3 { class: "row__title", {series.title.resolve(active)} }
                            p { class: "row__meta", "{series.location} · {series.year}" }
                        }
                    }
                })}
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {SHOWS_TITLE.resolve(active)} }
                }
                { SHOWS.iter().map(|show| rsx! {
                    Reveal { key: "{show.title.en}", margin_px: -40,
                        article { class: "row row--compact",
                            h3 { class: "row__title", {show.title.resolve(active)} }
                            p { class: "row__meta", {show.body.resolve(active)} }
                        }
                    }
                })}
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {CONTACT_TITLE.resolve(active)} }
                    p { class: "section__body", {CONTACT_BODY.resolve(active)} }
                }
            }

            Footer {}
        }
    }
}
