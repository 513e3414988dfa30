//! Casual variant: rounded cards on a soft gradient, pill links.

use crate::resume::{ColorScheme, Resume};

use super::{date_range, escape, section};

pub(super) fn render(r: &Resume, colors: &ColorScheme) -> String {
    let name = escape(&r.personal_info.full_name);
    let initial = escape(
        &r.personal_info
            .full_name
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_default(),
    );
    let style = stylesheet(colors);

    let tagline = section(&r.summary, |s| {
        format!("<p class=\"tagline\">{}</p>", escape(s))
    });

    let mut contact_items: Vec<String> = Vec::new();
    if !r.personal_info.email.is_empty() {
        let email = escape(&r.personal_info.email);
        contact_items.push(format!("<a href=\"mailto:{email}\">{email}</a>"));
    }
    if !r.personal_info.linked_in.is_empty() {
        contact_items.push(format!(
            "<a href=\"{}\">LinkedIn</a>",
            escape(&r.personal_info.linked_in)
        ));
    }
    if !r.personal_info.website.is_empty() {
        contact_items.push(format!(
            "<a href=\"{}\">Portfolio</a>",
            escape(&r.personal_info.website)
        ));
    }
    let contact = section(&contact_items.join("\n            "), |body| {
        format!("<div class=\"contact\">\n            {body}\n        </div>")
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
                 <h3>{title}</h3>\n\
                 <p class=\"meta\">{company} · {dates}</p>\n\
                 {description}</div>\n",
                title = escape(&exp.title),
                company = escape(&exp.company),
                dates = date_range(exp),
            )
        })
        .collect();
    let experience = section(&experience_cards, |cards| {
        format!("<section>\n<h2>Experience</h2>\n{cards}</section>\n")
    });

    let education_cards: String = r
        .education
        .iter()
        .map(|edu| {
            let field = if edu.field.is_empty() {
                String::new()
            } else {
                format!(" · {}", escape(&edu.field))
            };
            format!(
                "<div class=\"card\">\n\
                 <h3>{degree}</h3>\n\
                 <p class=\"meta\">{institution}{field}</p>\n</div>\n",
                degree = escape(&edu.degree),
                institution = escape(&edu.institution),
            )
        })
        .collect();
    let education = section(&education_cards, |cards| {
        format!("<section>\n<h2>Education</h2>\n{cards}</section>\n")
    });

    let skills = pill_section("Skills", &r.skills);

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
    let languages = section(&language_pills, |pills| {
        format!(
            "<section>\n<h2>Languages</h2>\n<div class=\"skills\">{pills}</div>\n</section>\n"
        )
    });

    let achievement_cards: String = r
        .achievements
        .iter()
        .map(|a| format!("<div class=\"card\"><p>{}</p></div>\n", escape(a)))
        .collect();
    let achievements = section(&achievement_cards, |cards| {
        format!("<section>\n<h2>Achievements</h2>\n{cards}</section>\n")
    });

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
                 <h3>{title}</h3>\n\
                 <p class=\"meta\">{number}{status}</p>\n</div>\n",
                title = escape(&p.title),
                status = p.status.label(),
            )
        })
        .collect();
    let patents = section(&patent_cards, |cards| {
        format!("<section>\n<h2>Patents</h2>\n{cards}</section>\n")
    });

    let hobbies = pill_section("Hobbies", &r.hobbies);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{name} - Resume</title>\n\
         <link href=\"https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700&display=swap\" rel=\"stylesheet\">\n\
         <style>{style}</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"container\">\n\
         <header>\n\
         <div class=\"avatar\">{initial}</div>\n\
         <h1>{name}</h1>\n\
         {tagline}\n\
         {contact}\n\
         </header>\n\
         {experience}\
         {education}\
         {skills}\
         {languages}\
         {achievements}\
         {patents}\
         {hobbies}\
         </div>\n\
         </body>\n\
         </html>\n"
    )
}

fn pill_section(heading: &str, items: &[String]) -> String {
    let pills: String = items
        .iter()
        .map(|item| format!("<span class=\"skill\">{}</span>", escape(item)))
        .collect();
    section(&pills, |body| {
        format!("<section>\n<h2>{heading}</h2>\n<div class=\"skills\">{body}</div>\n</section>\n")
    })
}

fn stylesheet(c: &ColorScheme) -> String {
    format!(
        "\n\
         * {{ margin: 0; padding: 0; box-sizing: border-box; }}\n\
         body {{\n\
           font-family: 'Poppins', sans-serif;\n\
           background: linear-gradient(135deg, {background} 0%, #e8f5e9 100%);\n\
           min-height: 100vh;\n\
           padding: 40px 20px;\n\
         }}\n\
         .container {{\n\
           max-width: 800px;\n\
           margin: 0 auto;\n\
           background: {secondary};\n\
           border-radius: 24px;\n\
           padding: 48px;\n\
           box-shadow: 0 10px 40px rgba(0,0,0,0.1);\n\
         }}\n\
         header {{ text-align: center; margin-bottom: 40px; }}\n\
         .avatar {{\n\
           width: 120px;\n\
           height: 120px;\n\
           border-radius: 50%;\n\
           background: linear-gradient(135deg, {accent}, #00cec9);\n\
           margin: 0 auto 20px;\n\
           display: flex;\n\
           align-items: center;\n\
           justify-content: center;\n\
           font-size: 48px;\n\
           color: white;\n\
         }}\n\
         h1 {{ font-size: 2.2rem; color: {primary}; }}\n\
         .tagline {{ color: {accent}; font-weight: 500; margin-top: 8px; }}\n\
         .contact {{\n\
           display: flex;\n\
           justify-content: center;\n\
           flex-wrap: wrap;\n\
           gap: 16px;\n\
           margin-top: 16px;\n\
         }}\n\
         .contact a {{\n\
           color: {accent};\n\
           text-decoration: none;\n\
           padding: 8px 16px;\n\
           background: rgba(0,184,148,0.1);\n\
           border-radius: 20px;\n\
           font-size: 0.9rem;\n\
         }}\n\
         section {{ margin-bottom: 32px; }}\n\
         h2 {{\n\
           font-size: 1.3rem;\n\
           color: {accent};\n\
           margin-bottom: 20px;\n\
           display: flex;\n\
           align-items: center;\n\
           gap: 10px;\n\
         }}\n\
         h2::before {{\n\
           content: '';\n\
           width: 4px;\n\
           height: 24px;\n\
           background: {accent};\n\
           border-radius: 2px;\n\
         }}\n\
         .card {{\n\
           background: #f8f9fa;\n\
           border-radius: 16px;\n\
           padding: 20px;\n\
           margin-bottom: 16px;\n\
         }}\n\
         h3 {{ color: {primary}; font-size: 1.1rem; }}\n\
         .meta {{ color: #636e72; font-size: 0.9rem; margin-top: 4px; }}\n\
         .description {{ margin-top: 12px; color: #444; line-height: 1.7; }}\n\
         .skills {{ display: flex; flex-wrap: wrap; gap: 10px; }}\n\
         .skill {{\n\
           background: linear-gradient(135deg, {accent}, #00cec9);\n\
           color: white;\n\
           padding: 8px 18px;\n\
           border-radius: 25px;\n\
           font-size: 0.9rem;\n\
           font-weight: 500;\n\
         }}\n",
        primary = c.primary,
        secondary = c.secondary,
        accent = c.accent,
        background = c.background,
    )
}
