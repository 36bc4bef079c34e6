//! Compiled-in landing page used on first boot and whenever the stored
//! document is missing or unreadable.

use serde_json::{json, Map, Value};

use super::model::SiteContent;

/// Builds a fresh copy of the default document.
pub fn default_content() -> SiteContent {
    let mut gemini = offering(
        "Google Gemini",
        "Годовая подписка на AI-ассистент — генерация контента, аналитика и автоматизация рутины.",
        "20 000 ₽ / год",
        "Годовая подписка на AI-ассистент Google Gemini. Используйте его для генерации идей и текстов постов, анализа контента конкурентов, создания контент-планов.",
    );
    gemini["featured"] = json!(true);
    gemini["badge"] = json!("AI-инструмент");

    SiteContent {
        hero: json!({
            "badge": "Открыт для новых клиентов",
            "title": "Продвижение в\u{a0}соцсетях",
            "subtitle": "Аудит, стратегия и разбор вашего Instagram. Прозрачные цены, измеримый результат.",
            "ctaText": "Смотреть услуги"
        }),
        sections: json!({
            "label": "Что я предлагаю",
            "title": "Услуги и\u{a0}цены",
            "subtitle": "Выберите подходящий формат — от быстрого разбора до полной стратегии роста",
            "tab1": "Услуги",
            "tab2": "Закрытые каналы"
        }),
        cta: json!({
            "title": "Остались вопросы?",
            "subtitle": "Напишите мне, и мы подберём подходящий формат работы под ваши задачи.",
            "btnText": "Написать в Telegram",
            "tgUrl": "https://t.me/MktRahim"
        }),
        about: json!({
            "name": "Rahim",
            "initial": "R",
            "bio": "SMM-специалист и маркетолог. Помогаю экспертам, предпринимателям и брендам выстраивать сильное присутствие в Instagram — от упаковки профиля до полной стратегии продвижения.",
            "stat1Value": "50+",
            "stat1Label": "проектов",
            "stat2Value": "3+",
            "stat2Label": "года опыта",
            "stat3Value": "100%",
            "stat3Label": "индивидуальный подход"
        }),
        services: Value::Array(vec![
            offering(
                "Консультация",
                "Персональная сессия: разберём вашу стратегию, ответим на вопросы и составим план действий.",
                "20 000 ₽",
                "Персональная сессия длительностью 60 минут. Разберём вашу текущую стратегию продвижения, ответим на все вопросы и составим пошаговый план действий.",
            ),
            offering(
                "Разбор шапки Instagram",
                "Анализ bio, аватара, ссылки и highlights — рекомендации по улучшению первого впечатления.",
                "2 000 ₽",
                "Подробный анализ первого экрана вашего профиля: аватар, имя и юзернейм, описание bio, ссылка, актуальные Highlights.",
            ),
            offering(
                "Разбор страницы",
                "Детальный анализ контента, визуала и структуры вашего профиля с рекомендациями по росту.",
                "5 000 ₽",
                "Детальный анализ вашего профиля целиком: визуальная сетка, качество контента, заголовки и тексты постов, использование Reels и Stories.",
            ),
            offering(
                "Полный аудит страницы",
                "Комплексная проверка: контент, охваты, вовлечённость, конкуренты. Подробный отчёт и стратегия.",
                "10 000 ₽",
                "Комплексная проверка всех аспектов аккаунта: контент-стратегия, охваты и вовлечённость, анализ целевой аудитории, сравнение с конкурентами.",
            ),
            gemini,
        ]),
        channels: Value::Array(vec![
            offering(
                "Канал по SMM",
                "Тренды, шаблоны, разборы Reels — ежедневные материалы для роста в соцсетях.",
                "1 500 ₽ / мес",
                "Закрытый Telegram-канал с ежедневными разборами трендов, готовыми шаблонами контент-планов, примерами успешных Reels и Stories.",
            ),
            offering(
                "Канал по маркетингу",
                "Воронки, кейсы, стратегии привлечения — всё для роста бизнеса и продаж.",
                "2 500 ₽ / мес",
                "Закрытый канал для предпринимателей и маркетологов. Разборы воронок продаж, стратегии привлечения клиентов, анализ рекламных кампаний.",
            ),
            offering(
                "Канал по нейросетям",
                "Промпты, инструменты, автоматизация — AI для маркетинга и бизнеса.",
                "2 000 ₽ / мес",
                "Всё о применении AI в маркетинге и бизнесе: промпты для ChatGPT, Gemini, Midjourney, автоматизация рутины, генерация контента.",
            ),
        ]),
        extra: Map::new(),
    }
}

/// A service or channel card.
fn offering(title: &str, short_desc: &str, price: &str, desc: &str) -> Value {
    json!({
        "title": title,
        "shortDesc": short_desc,
        "price": price,
        "desc": desc
    })
}
