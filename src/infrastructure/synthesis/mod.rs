mod template_synthesizer;

pub use template_synthesizer::TemplateSynthesizer;
