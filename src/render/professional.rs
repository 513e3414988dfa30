//! Professional variant: serif headings, single column, print-friendly.

use crate::resume::{ColorScheme, Resume};

use super::{date_range, escape, format_month, section};

pub(super) fn render(r: &Resume, colors: &ColorScheme) -> String {
    let name = escape(&r.personal_info.full_name);
    let style = stylesheet(colors);

    let mut contact_items: Vec<String> = Vec::new();
    if !r.personal_info.email.is_empty() {
        contact_items.push(format!("<span>{}</span>", escape(&r.personal_info.email)));
    }
    if !r.personal_info.phone.is_empty() {
        contact_items.push(format!("<span>{}</span>", escape(&r.personal_info.phone)));
    }
    if !r.personal_info.location.is_empty() {
        contact_items.push(format!(
            "<span>{}</span>",
            escape(&r.personal_info.location)
        ));
    }
    if !r.personal_info.linked_in.is_empty() {
        contact_items.push(format!(
            "<a href=\"{}\">LinkedIn</a>",
            escape(&r.personal_info.linked_in)
        ));
    }
    if !r.personal_info.website.is_empty() {
        contact_items.push(format!(
            "<a href=\"{}\">Website</a>",
            escape(&r.personal_info.website)
        ));
    }
    let contact = section(&contact_items.join("\n            "), |body| {
        format!("<div class=\"contact\">\n            {body}\n        </div>")
    });

    let summary = section(&r.summary, |s| {
        format!("<p class=\"summary\">{}</p>", escape(s))
    });

    let experience_items: String = r
        .experiences
        .iter()
        .map(|exp| {
            let description = section(&exp.description, |d| {
                format!("<p class=\"description\">{}</p>", escape(d))
            });
            let highlights = section(
                &exp.highlights
                    .iter()
                    .map(|h| format!("<li>{}</li>", escape(h)))
                    .collect::<String>(),
                |items| format!("<ul>{items}</ul>"),
            );
            format!(
                "<div class=\"experience-item\">\n\
                 <div class=\"experience-header\">\n\
                 <div><h3>{title}</h3><span class=\"company\">{company}</span></div>\n\
                 <span class=\"date\">{dates}</span>\n\
                 </div>\n{description}{highlights}</div>\n",
                title = escape(&exp.title),
                company = escape(&exp.company),
                dates = date_range(exp),
            )
        })
        .collect();
    let experience = section(&experience_items, |items| {
        format!("<section>\n<h2>Experience</h2>\n{items}</section>\n")
    });

    let education_items: String = r
        .education
        .iter()
        .map(|edu| {
            let field = if edu.field.is_empty() {
                String::new()
            } else {
                format!(" in {}", escape(&edu.field))
            };
            let date = edu
                .graduation_date
                .as_ref()
                .map(|d| format!("<span class=\"date\">{}</span>", format_month(d)))
                .unwrap_or_default();
            format!(
                "<div class=\"education-item\">\n\
                 <div class=\"education-header\">\n\
                 <div><h3>{degree}{field}</h3><span class=\"institution\">{institution}</span></div>\n\
                 {date}\n\
                 </div>\n</div>\n",
                degree = escape(&edu.degree),
                institution = escape(&edu.institution),
            )
        })
        .collect();
    let education = section(&education_items, |items| {
        format!("<section>\n<h2>Education</h2>\n{items}</section>\n")
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
    let languages = section(&language_pills, |items| {
        format!(
            "<section>\n<h2>Languages</h2>\n<div class=\"skills\">{items}</div>\n</section>\n"
        )
    });

    let achievement_items: String = r
        .achievements
        .iter()
        .map(|a| format!("<li>{}</li>", escape(a)))
        .collect();
    let achievements = section(&achievement_items, |items| {
        format!("<section>\n<h2>Achievements</h2>\n<ul>{items}</ul>\n</section>\n")
    });

    let patent_items: String = r
        .patents
        .iter()
        .map(|p| {
            let number = if p.patent_number.is_empty() {
                String::new()
            } else {
                format!("{} · ", escape(&p.patent_number))
            };
            format!(
                "<div class=\"experience-item\">\n\
                 <h3>{title}</h3>\n\
                 <p class=\"meta\">{number}{status}</p>\n</div>\n",
                title = escape(&p.title),
                status = p.status.label(),
            )
        })
        .collect();
    let patents = section(&patent_items, |items| {
        format!("<section>\n<h2>Patents</h2>\n{items}</section>\n")
    });

    let hobbies = pill_section("Hobbies &amp; Interests", &r.hobbies);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{name} - Resume</title>\n\
         <link href=\"https://fonts.googleapis.com/css2?family=Merriweather:wght@400;700&family=Open+Sans:wght@400;600&display=swap\" rel=\"stylesheet\">\n\
         <style>{style}</style>\n\
         </head>\n\
         <body>\n\
         <header>\n\
         <h1>{name}</h1>\n\
         {contact}\n\
         </header>\n\
         {summary}\n\
         {experience}\
         {education}\
         {skills}\
         {languages}\
         {achievements}\
         {patents}\
         {hobbies}\
         <footer>Built with resume-pages</footer>\n\
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
           font-family: 'Open Sans', sans-serif;\n\
           line-height: 1.6;\n\
           color: #333;\n\
           max-width: 800px;\n\
           margin: 0 auto;\n\
           padding: 40px 24px;\n\
           background: {background};\n\
         }}\n\
         header {{\n\
           text-align: center;\n\
           margin-bottom: 32px;\n\
           padding-bottom: 24px;\n\
           border-bottom: 2px solid {accent};\n\
         }}\n\
         h1 {{\n\
           font-family: 'Merriweather', serif;\n\
           font-size: 2.5rem;\n\
           color: {primary};\n\
           margin-bottom: 8px;\n\
         }}\n\
         .contact {{\n\
           display: flex;\n\
           justify-content: center;\n\
           flex-wrap: wrap;\n\
           gap: 16px;\n\
           color: #666;\n\
           font-size: 0.9rem;\n\
         }}\n\
         .contact a {{ color: {accent}; text-decoration: none; }}\n\
         .summary {{\n\
           font-size: 1.05rem;\n\
           color: #444;\n\
           margin-bottom: 32px;\n\
           text-align: center;\n\
           font-style: italic;\n\
         }}\n\
         section {{ margin-bottom: 28px; }}\n\
         h2 {{\n\
           font-family: 'Merriweather', serif;\n\
           font-size: 1.3rem;\n\
           color: {accent};\n\
           border-bottom: 1px solid #ddd;\n\
           padding-bottom: 8px;\n\
           margin-bottom: 16px;\n\
           text-transform: uppercase;\n\
           letter-spacing: 1px;\n\
         }}\n\
         .experience-item, .education-item {{ margin-bottom: 20px; }}\n\
         .experience-header, .education-header {{\n\
           display: flex;\n\
           justify-content: space-between;\n\
           align-items: baseline;\n\
           flex-wrap: wrap;\n\
         }}\n\
         h3 {{ font-size: 1.1rem; color: {primary}; }}\n\
         .company, .institution {{ color: #666; font-weight: 600; }}\n\
         .date {{ color: #888; font-size: 0.9rem; }}\n\
         .description {{ margin-top: 8px; color: #444; }}\n\
         .meta {{ color: #888; font-size: 0.9rem; margin-top: 4px; }}\n\
         ul {{ margin-top: 8px; padding-left: 20px; }}\n\
         li {{ margin-bottom: 4px; color: #444; }}\n\
         .skills {{ display: flex; flex-wrap: wrap; gap: 10px; }}\n\
         .skill {{\n\
           background: {secondary};\n\
           padding: 6px 14px;\n\
           border-radius: 4px;\n\
           font-size: 0.9rem;\n\
         }}\n\
         footer {{\n\
           text-align: center;\n\
           margin-top: 40px;\n\
           color: #999;\n\
           font-size: 0.8rem;\n\
         }}\n\
         @media print {{\n\
           body {{ padding: 0; }}\n\
           header {{ border-bottom-color: {accent}; }}\n\
         }}\n",
        primary = c.primary,
        secondary = c.secondary,
        accent = c.accent,
        background = c.background,
    )
}
