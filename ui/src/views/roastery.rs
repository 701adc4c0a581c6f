//! "Ember Roastery": coffee roastery template.
//! Hero, current coffees, café locations, and a wholesale note.

use dioxus::prelude::*;

use crate::components::{Footer, Reveal, TemplateNav};
use crate::core::content::{MenuItem, Office};
use crate::i18n::{use_i18n, Tr};

const HERO_KICKER: Tr = Tr::full("Coffee roastery", "커피 로스터리", "咖啡烘焙坊", "コーヒーロースタリー");

const HERO_TITLE: Tr = Tr::full(
    "Roasted on Tuesdays, gone by Friday.",
    "화요일에 볶고, 금요일이면 동납니다.",
    "周二烘焙，周五售罄。",
    "火曜に焙煎、金曜には完売。",
);

const HERO_LEDE: Tr = Tr::full(
    "A six-kilo roaster in a former tram depot. We buy from eleven farms we can name from memory and roast lighter than your last café did.",
    "옛 트램 차고의 6kg 로스터. 이름을 외우고 있는 열한 곳의 농장에서 생두를 사고, 지난번 카페보다 약하게 볶습니다.",
    "一台六公斤烘焙机，安在旧电车库里。我们从十一个叫得出名字的庄园采购，烘焙度比你上一家咖啡馆更浅。",
    "旧トラム車庫に置いた6kgの焙煎機。名前をそらで言える11の農園から仕入れ、前に通った店より浅く焼きます。",
);

const COFFEES_TITLE: Tr = Tr::full("On the shelf this week", "이번 주 선반", "本周在售", "今週の棚");
const CAFES_TITLE: Tr = Tr::full("Cafés", "카페", "门店", "カフェ");
const WHOLESALE_TITLE: Tr = Tr::full("Wholesale", "도매", "批发合作", "卸売");

const WHOLESALE_BODY: Tr = Tr::full(
    "We supply a small number of cafés and restaurants that dial in daily. Training, water advice, and honest feedback on your espresso included.",
    "매일 추출값을 맞추는 소수의 카페와 레스토랑에만 납품합니다. 교육, 수질 상담, 에스프레소에 대한 솔직한 피드백 포함.",
    "我们只向少数每天校准萃取参数的咖啡馆与餐厅供货。含培训、水质建议，以及对你们意式浓缩的坦率反馈。",
    "毎日抽出を調整する少数のカフェとレストランにのみ卸しています。トレーニング、水質の助言、エスプレッソへの率直なフィードバック付き。",
);

const WHOLESALE_CTA: Tr = Tr::full("Ask about supply", "납품 문의하기", "洽谈供货", "取引について問い合わせる");

static COFFEES: [MenuItem; 4] = [
    MenuItem {
        name: Tr::full("Gesha, La Soledad", "게샤, 라 솔레다드", "瑰夏 · 拉索莱达", "ゲイシャ、ラ・ソレダッド"),
        description: Tr::full(
            "Washed; jasmine and cold peach.",
            "워시드 — 재스민과 차가운 복숭아.",
            "水洗处理；茉莉与冰镇蜜桃。",
            "ウォッシュト。ジャスミンと冷たい桃。",
        ),
        price: "€21 / 250g",
    },
    MenuItem {
        name: Tr::full("SL28, Gatomboya", "SL28, 가톰보야", "SL28 · 加通博亚", "SL28、ガトンボヤ"),
        description: Tr::full(
            "Washed; blackcurrant, long finish.",
            "워시드 — 블랙커런트, 긴 여운.",
            "水洗处理；黑加仑，余韵悠长。",
            "ウォッシュト。カシスの風味、長い余韻。",
        ),
        price: "€16 / 250g",
    },
    MenuItem {
        name: Tr::full("Natural, Hambela", "내추럴, 함벨라", "日晒 · 罕贝拉", "ナチュラル、ハンベラ"),
        description: Tr::full(
            "Dried on raised beds; blueberry jam.",
            "건조대에서 말린 생두 — 블루베리 잼.",
            "高架晾床日晒；蓝莓果酱风味。",
            "棚干燥。ブルーベリージャムのような甘さ。",
        ),
        price: "€15 / 250g",
    },
    MenuItem {
        name: Tr::full("Espresso blend, Depot", "에스프레소 블렌드, 디포", "意式拼配 · 车库", "エスプレッソブレンド、デポ"),
        description: Tr::full(
            "Two farms, one season; cooked plum.",
            "두 농장, 한 시즌 — 졸인 자두.",
            "两个庄园，同一季节；熟李子风味。",
            "二つの農園、同じ季節。煮たプラムの味わい。",
        ),
        price: "€13 / 250g",
    },
];

static CAFES: [Office; 2] = [
    Office {
        city: Tr::full("Depot", "디포", "车库店", "デポ"),
        address: "Spårvagnsgatan 3, Malmö",
    },
    Office {
        city: Tr::full("Harbor kiosk", "하버 키오스크", "港口亭", "ハーバーキオスク"),
        address: "Skeppsbron 12, Malmö",
    },
];

#[component]
pub fn Roastery() -> Element {
    let active = use_i18n()();

    rsx! {
        div { class: "template template--roastery",
            TemplateNav { brand: "Ember Roastery", accent: "accent-ember" }

            header { class: "hero",
                Reveal {
                    p { class: "hero__kicker", {HERO_KICKER.resolve(active)} }
                    h1 { class: "hero__title", {HERO_TITLE.resolve(active)} }
                    p { class: "hero__lede", {HERO_LEDE.resolve(active)} }
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {COFFEES_TITLE.resolve(active)} }
                }
                { COFFEES.iter().enumerate().map(|(i, coffee)| rsx! {
                    Reveal {
                        key: "{coffee.price}-{i}",
                        delay_ms: (i as u32) * 70,
                        margin_px: -40,
                        article { class: "row row--menu",
                            div { class: "row__lead",
                                h3 { class: "row__title", {coffee.name.resolve(active)} }
                                p { class: "row__body", {coffee.description.resolve(active)} }
                            }
                            span { class: "row__price", "{coffee.price}" }
                        }
                    }
                })}
            }

            section { class: "section section--split",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {CAFES_TITLE.resolve(active)} }
                }
                div { class: "split",
                    { CAFES.iter().map(|cafe| rsx! {
                        Reveal { key: "{cafe.address}", margin_px: -40,
                            article { class: "panel",
                                h3 { class: "panel__title", {cafe.city.resolve(active)} }
                                p { class: "panel__body", "{cafe.address}" }
                            }
                        }
                    })}
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {WHOLESALE_TITLE.resolve(active)} }
                    p { class: "section__body", {WHOLESALE_BODY.resolve(active)} }
                    span { class: "cta__button", {WHOLESALE_CTA.resolve(active)} }
                }
            }

            Footer {}
        }
    }
}
