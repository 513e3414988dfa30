//! Playful variant: bold background, card grid, emoji accents.

use crate::resume::{ColorScheme, Resume};

use super::{date_range, escape, format_month, section};

pub(super) fn render(r: &Resume, colors: &ColorScheme) -> String {
    let name = escape(&r.personal_info.full_name);
    let style = stylesheet(colors);

    let subtitle = section(&r.summary, |s| {
        format!("<p class=\"subtitle\">{}</p>", escape(s))
    });

    let mut link_items: Vec<String> = Vec::new();
    if !r.personal_info.email.is_empty() {
        link_items.push(format!(
            "<a href=\"mailto:{}\">📧 Email</a>",
            escape(&r.personal_info.email)
        ));
    }
    if !r.personal_info.linked_in.is_empty() {
        link_items.push(format!(
            "<a href=\"{}\">💼 LinkedIn</a>",
            escape(&r.personal_info.linked_in)
        ));
    }
    if !r.personal_info.website.is_empty() {
        link_items.push(format!(
            "<a href=\"{}\">🌐 Website</a>",
            escape(&r.personal_info.website)
        ));
    }
    let links = section(&link_items.join("\n            "), |body| {
        format!("<div class=\"links\">\n            {body}\n        </div>")
    });

    let experience_cards: String = r
        .experiences
        .iter()
        .map(|exp| {
            let description = section(&exp.description, |d| {
                format!("<p class=\"description\">{}</p>", escape(d))
            });
            format!(
                "<div class=\"card\">\n\
                 <h2>💼 Experience</h2>\n\
                 <h3>{title}</h3>\n\
                 <p class=\"meta\">{company} · {dates}</p>\n\
                 {description}</div>\n",
                title = escape(&exp.title),
                company = escape(&exp.company),
                dates = date_range(exp),
            )
        })
        .collect();

    let education_cards: String = r
        .education
        .iter()
        .map(|edu| {
            let date = edu
                .graduation_date
                .as_ref()
                .map(|d| format!("<p class=\"meta\">{}</p>\n", format_month(d)))
                .unwrap_or_default();
            format!(
                "<div class=\"card\">\n\
                 <h2>🎓 Education</h2>\n\
                 <h3>{degree}</h3>\n\
                 <p class=\"meta\">{institution}</p>\n{date}</div>\n",
                degree = escape(&edu.degree),
                institution = escape(&edu.institution),
            )
        })
        .collect();

    let patent_cards: String = r
        .patents
        .iter()
        .map(|p| {
            let number = if p.patent_number.is_empty() {
                String::new()
            } else {
                format!("{} · ", escape(&p.patent_number))
            };
            format!(
                "<div class=\"card\">\n\
                 <h2>💡 Patents</h2>\n\
                 <h3>{title}</h3>\n\
                 <p class=\"meta\">{number}{status}</p>\n</div>\n",
                title = escape(&p.title),
                status = p.status.label(),
            )
        })
        .collect();

    let grid = section(
        &format!("{experience_cards}{education_cards}{patent_cards}"),
        |cards| format!("<div class=\"grid\">\n{cards}</div>\n"),
    );

    let skills = pill_card("⚡ Skills", &pill_items(&r.skills));

    let language_pills: String = r
        .languages
        .iter()
        .map(|l| {
            format!(
                "<span class=\"skill\">{} <small>({})</small></span>",
                escape(&l.name),
                l.proficiency.label()
            )
        })
        .collect();
    let languages = pill_card("🗣 Languages", &language_pills);

    let achievement_list = section(
        &r.achievements
            .iter()
            .map(|a| format!("<li>{}</li>", escape(a)))
            .collect::<String>(),
        |items| {
            format!(
                "<div class=\"wide-card\">\n\
                 <h2>🏆 Achievements</h2>\n\
                 <ul>{items}</ul>\n</div>\n"
            )
        },
    );

    let hobbies = pill_card("🎈 Hobbies", &pill_items(&r.hobbies));

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{name} ✨</title>\n\
         <link href=\"https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600;700&display=swap\" rel=\"stylesheet\">\n\
         <style>{style}</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"container\">\n\
         <header>\n\
         <h1>{name} 👋</h1>\n\
         {subtitle}\n\
         {links}\n\
         </header>\n\
         {grid}\
         {skills}\
         {languages}\
         {achievement_list}\
         {hobbies}\
         <footer>Made with 💜 using resume-pages</footer>\n\
         </div>\n\
         </body>\n\
         </html>\n"
    )
}

fn pill_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<span class=\"skill\">{}</span>", escape(item)))
        .collect()
}

fn pill_card(heading: &str, pills: &str) -> String {
    section(pills, |body| {
        format!(
            "<div class=\"wide-card\">\n\
             <h2>{heading}</h2>\n\
             <div class=\"skills\">{body}</div>\n</div>\n"
        )
    })
}

fn stylesheet(c: &ColorScheme) -> String {
    format!(
        "\n\
         * {{ margin: 0; padding: 0; box-sizing: border-box; }}\n\
         body {{\n\
           font-family: 'Space Grotesk', sans-serif;\n\
           background: {background};\n\
           min-height: 100vh;\n\
           padding: 40px 20px;\n\
           color: white;\n\
         }}\n\
         .container {{ max-width: 900px; margin: 0 auto; }}\n\
         header {{\n\
           text-align: center;\n\
           padding: 60px 20px;\n\
           background: linear-gradient(135deg, #a29bfe 0%, {primary} 100%);\n\
           border-radius: 30px;\n\
           margin-bottom: 30px;\n\
           position: relative;\n\
           overflow: hidden;\n\
         }}\n\
         header::before {{\n\
           content: '✨';\n\
           position: absolute;\n\
           font-size: 100px;\n\
           opacity: 0.1;\n\
           top: -20px;\n\
           right: -20px;\n\
         }}\n\
         h1 {{ font-size: 3rem; font-weight: 700; margin-bottom: 12px; }}\n\
         .subtitle {{\n\
           font-size: 1.2rem;\n\
           opacity: 0.9;\n\
           max-width: 500px;\n\
           margin: 0 auto;\n\
         }}\n\
         .links {{\n\
           display: flex;\n\
           justify-content: center;\n\
           flex-wrap: wrap;\n\
           gap: 12px;\n\
           margin-top: 24px;\n\
         }}\n\
         .links a {{\n\
           color: white;\n\
           background: rgba(255,255,255,0.2);\n\
           padding: 10px 20px;\n\
           border-radius: 25px;\n\
           text-decoration: none;\n\
           font-weight: 500;\n\
           transition: all 0.3s;\n\
         }}\n\
         .links a:hover {{ background: rgba(255,255,255,0.3); transform: translateY(-2px); }}\n\
         .grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 20px; }}\n\
         .card, .wide-card {{\n\
           background: rgba(255,255,255,0.1);\n\
           backdrop-filter: blur(10px);\n\
           border-radius: 20px;\n\
           padding: 24px;\n\
           transition: transform 0.3s;\n\
         }}\n\
         .wide-card {{ margin-top: 30px; text-align: center; }}\n\
         .card:hover {{ transform: translateY(-5px); }}\n\
         h2 {{\n\
           font-size: 0.9rem;\n\
           text-transform: uppercase;\n\
           letter-spacing: 2px;\n\
           opacity: 0.7;\n\
           margin-bottom: 16px;\n\
         }}\n\
         h3 {{ font-size: 1.2rem; margin-bottom: 8px; }}\n\
         .meta {{ opacity: 0.7; font-size: 0.9rem; }}\n\
         .description {{ margin-top: 12px; opacity: 0.9; line-height: 1.6; }}\n\
         ul {{ list-style-position: inside; text-align: left; }}\n\
         li {{ margin-bottom: 6px; opacity: 0.9; }}\n\
         .skills {{\n\
           display: flex;\n\
           flex-wrap: wrap;\n\
           gap: 10px;\n\
           justify-content: center;\n\
         }}\n\
         .skill {{\n\
           background: {accent};\n\
           padding: 10px 20px;\n\
           border-radius: 25px;\n\
           font-weight: 500;\n\
           transition: transform 0.2s;\n\
         }}\n\
         .skill:hover {{ transform: scale(1.05); }}\n\
         footer {{\n\
           text-align: center;\n\
           margin-top: 40px;\n\
           opacity: 0.6;\n\
           font-size: 0.9rem;\n\
         }}\n",
        primary = c.primary,
        accent = c.accent,
        background = c.background,
    )
}
