//! "Aurelia": jewelry brand template.
//! Hero, collections, a craftsmanship note, and boutiques.

use dioxus::prelude::*;

use crate::components::{Footer, Reveal, TemplateNav};
use crate::core::content::{Collection, Office};
use crate::i18n::{use_i18n, Tr};

const HERO_KICKER: Tr = Tr::full("Fine jewelry", "파인 주얼리", "高级珠宝", "ファインジュエリー");

const HERO_TITLE: Tr = Tr::full(
    "Gold that remembers being a river.",
    "강이었던 기억을 간직한 금.",
    "记得自己曾是河流的黄金。",
    "川だった頃を覚えている金。",
);

const HERO_LEDE: Tr = Tr::full(
    "Recycled metals, stones with papers, and settings cut by the same four hands since 2009.",
    "재활용 금속, 이력이 증명된 원석, 2009년부터 같은 네 손이 깎아 온 세팅.",
    "再生金属、有证书的宝石，以及自 2009 年起由同一双双手打磨的镶座。",
    "リサイクルメタル、来歴の確かな石、2009年から同じ四つの手が削り出すセッティング。",
);

const COLLECTIONS_TITLE: Tr = Tr::full("Collections", "컬렉션", "系列", "コレクション");
const CRAFT_TITLE: Tr = Tr::full("The workshop", "공방", "工坊", "工房");
const BOUTIQUES_TITLE: Tr = Tr::full("Boutiques", "부티크", "精品店", "ブティック");

const CRAFT_BODY: Tr = Tr::full(
    "Every piece is made to order in our Antwerp workshop. Nothing is cast in batches; nothing ships before the engraver signs the inside of the band.",
    "모든 피스는 앤트워프 공방에서 주문 제작됩니다. 대량 주조는 없으며, 조각가가 밴드 안쪽에 서명하기 전에는 어떤 것도 출고되지 않습니다.",
    "每件作品都在我们的安特卫普工坊按订单制作。绝不批量浇铸；雕刻师在戒圈内侧签名之前，任何作品都不会发出。",
    "すべての作品はアントワープの工房で受注制作。量産鋳造は行わず、彫刻師がバンドの内側に署名するまで出荷されません。",
);

static COLLECTIONS: [Collection; 3] = [
    Collection {
        name: Tr::full("Riverbed", "리버베드", "河床", "リバーベッド"),
        pieces: 12,
        note: Tr::full(
            "Hammered bands and tumbled stones.",
            "두드린 밴드와 물에 닳은 원석.",
            "锤纹戒圈与水磨原石。",
            "鎚目のバンドと磨かれた原石。",
        ),
    },
    Collection {
        name: Tr::full("Meridian", "메리디안", "子午线", "メリディアン"),
        pieces: 8,
        note: Tr::full(
            "Thin lines of gold, worn stacked.",
            "겹쳐 끼는 가느다란 금의 선.",
            "纤细金线，叠戴成型。",
            "重ねて纏う細い金のライン。",
        ),
    },
    Collection {
        name: Tr::full("Night Harbor", "나이트 하버", "夜港", "ナイトハーバー"),
        pieces: 6,
        note: Tr::full(
            "Dark sapphires in closed settings.",
            "클로즈드 세팅의 짙은 사파이어.",
            "封闭式镶嵌的深色蓝宝石。",
            "クローズドセッティングの深いサファイア。",
        ),
    },
];

static BOUTIQUES: [Office; 2] = [
    Office {
        city: Tr::full("Antwerp", "앤트워프", "安特卫普", "アントワープ"),
        address: "Schuttershofstraat 21, 2000 Antwerpen",
    },
    Office {
        city: Tr::full("Tokyo", "도쿄", "东京", "東京"),
        address: "6-8-18 Minami-Aoyama, Minato-ku",
    },
];

#[component]
pub fn Jewelry() -> Element {
    let active = use_i18n()();

    rsx! {
        div { class: "template template--jewelry",
            TemplateNav { brand: "Aurelia", accent: "accent-gold" }

            header { class: "hero",
                Reveal {
                    p { class: "hero__kicker", {HERO_KICKER.resolve(active)} }
                    h1 { class: "hero__title", {HERO_TITLE.resolve(active)} }
                    p { class: "hero__lede", {HERO_LEDE.resolve(active)} }
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {COLLECTIONS_TITLE.resolve(active)} }
                }
                div { class: "grid grid--three",
                    { COLLECTIONS.iter().enumerate().map(|(i, collection)| rsx! {
                        Reveal {
                            key: "{collection.name.en}",
                            delay_ms: (i as u32) * 90,
                            margin_px: -40,
                            article { class: "panel",
                                h3 { class: "panel__title", {collection.name.resolve(active)} }
                                p { class: "panel__meta", "{collection.pieces}" }
                                p { class: "panel__body", {collection.note.resolve(active)} }
                            }
                        }
                    })}
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {CRAFT_TITLE.resolve(active)} }
                    p { class: "section__body", {CRAFT_BODY.resolve(active)} }
                }
            }

            section { class: "section section--split",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {BOUTIQUES_TITLE.resolve(active)} }
                }
                div { class: "split",
                    { BOUTIQUES.iter().map(|boutique| rsx! {
                        Reveal { key: "{boutique.address}", margin_px: -40,
                            article { class: "panel",
                                h3 { class: "panel__title", {boutique.city.resolve(active)} }
                                p { class: "panel__body", "{boutique.address}" }
                            }
                        }
                    })}
                }
            }

            Footer {}
        }
    }
}
