//! services/template_service.rs
//! Catálogo fijo de plantillas. La plantilla activa no es estado global:
//! se elige acá y se pasa por valor al orquestador de envíos.

use std::sync::OnceLock;

use crate::models::template_model::EmailTemplate;

/// Las tres plantillas precargadas (el operador puede sobreescribir
/// subject/html/text en su copia antes de enviar).
pub fn catalog() -> &'static [EmailTemplate] {
    static CATALOG: OnceLock<Vec<EmailTemplate>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Busca por id ("welcome", "value-proposition", "follow-up").
pub fn find(id: &str) -> Option<&'static EmailTemplate> {
    catalog().iter().find(|t| t.id == id)
}

fn build_catalog() -> Vec<EmailTemplate> {
    vec![
        EmailTemplate {
            id: "welcome".to_string(),
            name: "Welcome & Introduction".to_string(),
            subject: "Welcome to {{company}} - Let's Connect!".to_string(),
            description: "A warm welcome email to introduce yourself and your company".to_string(),
            category: "Onboarding".to_string(),
            html: r##"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h2 style="color: #2563eb;">Hello {{name}}!</h2>
  <p style="font-size: 16px; line-height: 1.6; color: #374151;">
    I hope this email finds you well! I'm reaching out from <strong>{{company}}</strong>
    and wanted to personally welcome you to our community.
  </p>
  <div style="background-color: #f3f4f6; padding: 20px; border-radius: 8px;">
    <h3 style="color: #1f2937;">What we can offer:</h3>
    <ul style="color: #374151; line-height: 1.8;">
      <li>Strategic consulting and planning</li>
      <li>Custom solutions tailored to your needs</li>
      <li>Ongoing support and optimization</li>
    </ul>
  </div>
  <p style="font-size: 16px; line-height: 1.6; color: #374151;">
    I'd love to schedule a quick 15-minute call to learn more about your business.
  </p>
  <div style="text-align: center; margin: 30px 0;">
    <a href="mailto:{{email}}?subject=Let's Connect - {{company}}"
       style="background-color: #2563eb; color: white; padding: 12px 30px; text-decoration: none; border-radius: 6px; font-weight: bold;">
      Schedule a Call
    </a>
  </div>
  <p style="font-size: 14px; color: #6b7280;">
    Best regards,<br>
    The {{company}} Team<br>
    <a href="mailto:{{email}}" style="color: #2563eb;">{{email}}</a>
  </p>
</div>
"##
            .to_string(),
            text: r##"Hello {{name}}!

I hope this email finds you well! I'm reaching out from {{company}} and wanted to personally welcome you to our community.

What we can offer:
- Strategic consulting and planning
- Custom solutions tailored to your needs
- Ongoing support and optimization

I'd love to schedule a quick 15-minute call to learn more about your business.

Best regards,
The {{company}} Team
{{email}}
"##
            .to_string(),
        },
        EmailTemplate {
            id: "value-proposition".to_string(),
            name: "Value Proposition".to_string(),
            subject: "How {{company}} Can Transform Your Business".to_string(),
            description: "A focused email highlighting specific value propositions and benefits"
                .to_string(),
            category: "Sales".to_string(),
            html: r##"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h2 style="color: #059669;">Hi {{name}},</h2>
  <p style="font-size: 16px; line-height: 1.6; color: #374151;">
    I noticed you're in the {{company}} space, and I wanted to share something
    that could be game-changing for your business.
  </p>
  <div style="background-color: #f0fdf4; padding: 20px; border-radius: 8px;">
    <h3 style="color: #059669;">Our Solution</h3>
    <p style="color: #374151;">At {{company}}, we've developed a proven system that helps businesses:</p>
    <ul style="color: #374151; line-height: 1.8;">
      <li>Increase efficiency by 40%</li>
      <li>Reduce costs by 25%</li>
      <li>Scale operations seamlessly</li>
    </ul>
  </div>
  <div style="text-align: center; margin: 30px 0;">
    <a href="mailto:{{email}}?subject=Case Study - {{company}}"
       style="background-color: #059669; color: white; padding: 12px 30px; text-decoration: none; border-radius: 6px; font-weight: bold;">
      Share Case Study
    </a>
  </div>
  <p style="font-size: 14px; color: #6b7280;">
    Looking forward to connecting!<br>
    {{company}} Team<br>
    <a href="mailto:{{email}}" style="color: #059669;">{{email}}</a>
  </p>
</div>
"##
            .to_string(),
            text: r##"Hi {{name}},

I noticed you're in the {{company}} space, and I wanted to share something that could be game-changing for your business.

Our Solution:
At {{company}}, we've developed a proven system that helps businesses:
- Increase efficiency by 40%
- Reduce costs by 25%
- Scale operations seamlessly

Looking forward to connecting!
{{company}} Team
{{email}}
"##
            .to_string(),
        },
        EmailTemplate {
            id: "follow-up".to_string(),
            name: "Follow-up & Engagement".to_string(),
            subject: "Quick Follow-up - {{company}}".to_string(),
            description: "A gentle follow-up email to re-engage and maintain connection".to_string(),
            category: "Nurture".to_string(),
            html: r##"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h2 style="color: #7c3aed;">Hi {{name}},</h2>
  <p style="font-size: 16px; line-height: 1.6; color: #374151;">
    I hope you're having a great week! I wanted to follow up on our previous
    conversation about how {{company}} could help your business.
  </p>
  <div style="background-color: #faf5ff; padding: 20px; border-radius: 8px;">
    <h3 style="color: #7c3aed;">Recent Success Story</h3>
    <p style="color: #374151;">
      We just helped a client in your industry achieve great results. I know
      you're busy, so I'll keep this brief.
    </p>
  </div>
  <p style="font-size: 16px; line-height: 1.6; color: #374151;">
    Would you be interested in a quick 10-minute call to discuss how similar
    strategies could work for your business?
  </p>
  <div style="text-align: center; margin: 30px 0;">
    <a href="mailto:{{email}}?subject=Quick Call - {{company}}"
       style="background-color: #7c3aed; color: white; padding: 12px 30px; text-decoration: none; border-radius: 6px; font-weight: bold;">
      Schedule Quick Call
    </a>
  </div>
  <p style="font-size: 14px; color: #6b7280;">
    No pressure at all - just wanted to stay in touch!<br>
    {{company}} Team<br>
    <a href="mailto:{{email}}" style="color: #7c3aed;">{{email}}</a>
  </p>
</div>
"##
            .to_string(),
            text: r##"Hi {{name}},

I hope you're having a great week! I wanted to follow up on our previous conversation about how {{company}} could help your business.

We just helped a client in your industry achieve great results. I know you're busy, so I'll keep this brief.

Would you be interested in a quick 10-minute call to discuss how similar strategies could work for your business?

No pressure at all - just wanted to stay in touch!
{{company}} Team
{{email}}
"##
            .to_string(),
        },
    ]
}
