//! Content shipped with the site.

use super::types::{BlogPost, BlogPostStatus, CaseStudy, Service, Testimonial};

fn testimonial(id: &str, name: &str, company: &str, role: &str, content: &str) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        role: role.to_string(),
        content: content.to_string(),
        rating: 5,
    }
}

pub(crate) fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "1",
            "Sarah Chen",
            "TechFlow Inc.",
            "CTO",
            "Lumis transformed our operations with their AI automation solutions. We reduced manual tasks by 70% and saw ROI within 3 months.",
        ),
        testimonial(
            "2",
            "Michael Rodriguez",
            "ScaleUp Ventures",
            "CEO",
            "Their DevOps expertise helped us achieve 99.9% uptime. The team is incredibly responsive and technically brilliant.",
        ),
        testimonial(
            "3",
            "Emily Watson",
            "DataDrive Analytics",
            "VP Engineering",
            "The AI agents Lumis built for us handle customer inquiries 24/7. Support costs down 50%, customer satisfaction up 40%.",
        ),
        testimonial(
            "4",
            "James Park",
            "CloudFirst Solutions",
            "Director of IT",
            "Database optimization and cloud migration was seamless. Lumis delivered on time and under budget. Highly recommend!",
        ),
        testimonial(
            "5",
            "Lisa Thompson",
            "RetailPro",
            "COO",
            "From website redesign to backend automation, Lumis handled everything professionally. Our e-commerce conversion rate doubled.",
        ),
    ]
}

struct CaseStudySeed<'a> {
    id: &'a str,
    title: &'a str,
    company: &'a str,
    industry: &'a str,
    challenge: &'a str,
    solution: &'a str,
    results: [&'a str; 4],
    image_url: &'a str,
    pdf_filename: &'a str,
}

impl From<CaseStudySeed<'_>> for CaseStudy {
    fn from(s: CaseStudySeed<'_>) -> Self {
        Self {
            id: s.id.to_string(),
            title: s.title.to_string(),
            company: s.company.to_string(),
            industry: s.industry.to_string(),
            challenge: s.challenge.to_string(),
            solution: s.solution.to_string(),
            results: s.results.iter().map(|r| r.to_string()).collect(),
            image_url: s.image_url.to_string(),
            pdf_filename: Some(s.pdf_filename.to_string()),
        }
    }
}

pub(crate) fn case_studies() -> Vec<CaseStudy> {
    [
        CaseStudySeed {
            id: "cs1",
            title: "AI-Powered Customer Service Automation",
            company: "FinanceHub Global",
            industry: "Financial Services",
            challenge: "Manual customer support handling 10,000+ daily inquiries with 48-hour response times.",
            solution: "Deployed intelligent AI agents with natural language processing, integrated with existing CRM systems.",
            results: [
                "Response time reduced to under 5 minutes",
                "70% of inquiries resolved without human intervention",
                "Customer satisfaction improved by 45%",
                "$2M annual savings in support costs",
            ],
            image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600",
            pdf_filename: "case_study_financehub.pdf",
        },
        CaseStudySeed {
            id: "cs2",
            title: "Cloud Infrastructure Modernization",
            company: "MedTech Innovations",
            industry: "Healthcare Technology",
            challenge: "Legacy on-premise infrastructure causing reliability issues and compliance concerns.",
            solution: "Full cloud migration to AWS with HIPAA-compliant architecture and automated scaling.",
            results: [
                "99.99% uptime achieved",
                "40% reduction in infrastructure costs",
                "Full HIPAA compliance maintained",
                "Deployment time reduced from weeks to hours",
            ],
            image_url: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=600",
            pdf_filename: "case_study_medtech.pdf",
        },
        CaseStudySeed {
            id: "cs3",
            title: "E-Commerce Platform Optimization",
            company: "StyleNow Retail",
            industry: "E-Commerce",
            challenge: "Slow website performance and poor mobile experience affecting sales conversion.",
            solution: "Complete frontend rebuild with React, database optimization, and CDN implementation.",
            results: [
                "Page load time reduced by 65%",
                "Mobile conversion rate increased 120%",
                "Black Friday traffic handled seamlessly",
                "SEO rankings improved significantly",
            ],
            image_url: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=600",
            pdf_filename: "case_study_stylenow.pdf",
        },
    ]
    .into_iter()
    .map(CaseStudy::from)
    .collect()
}

fn teaser(id: &str, title: &str, excerpt: &str, category: &str, image_url: &str) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        category: category.to_string(),
        author: "Lumis Team".to_string(),
        image_url: image_url.to_string(),
        status: BlogPostStatus::ComingSoon,
    }
}

pub(crate) fn blog_posts() -> Vec<BlogPost> {
    vec![
        teaser(
            "blog1",
            "The Future of AI Agents in Business Automation",
            "Discover how intelligent AI agents are revolutionizing business operations and what it means for your company's competitive edge.",
            "AI & Automation",
            "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=600",
        ),
        teaser(
            "blog2",
            "DevOps Best Practices for Startups",
            "Essential DevOps strategies that help startups scale efficiently while maintaining reliability and security.",
            "DevOps",
            "https://images.unsplash.com/photo-1667372393119-3d4c48d07fc9?w=600",
        ),
        teaser(
            "blog3",
            "Database Optimization: A Complete Guide",
            "Learn proven techniques to optimize your database performance and reduce costs without compromising data integrity.",
            "Database",
            "https://images.unsplash.com/photo-1544383835-bda2bc66a55d?w=600",
        ),
    ]
}

fn service(id: &str, name: &str, description: &str, icon: &str) -> Service {
    Service {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

pub(crate) fn services() -> Vec<Service> {
    vec![
        service(
            "svc1",
            "AI Agent Building",
            "Custom AI agents that automate workflows, handle customer interactions, and drive intelligent decision-making.",
            "brain",
        ),
        service(
            "svc2",
            "Automation Software",
            "End-to-end automation solutions that eliminate repetitive tasks and streamline your business processes.",
            "bot",
        ),
        service(
            "svc3",
            "Web Development",
            "Modern, responsive websites and web applications built with cutting-edge technologies.",
            "globe",
        ),
        service(
            "svc4",
            "DevOps & Cloud",
            "Infrastructure automation, CI/CD pipelines, and cloud migration for scalable, reliable systems.",
            "server",
        ),
        service(
            "svc5",
            "Database Solutions",
            "Database design, optimization, migration, and maintenance for peak performance.",
            "database",
        ),
    ]
}
