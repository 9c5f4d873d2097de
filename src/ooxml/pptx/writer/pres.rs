/// Presentation writer for PPTX.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, Part};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::pptx::template;
use chrono::Utc;
use std::fmt::Write as FmtWrite;
use std::path::Path;
use tracing::{debug, info};

use super::slide::MutableSlide;

const FIRST_SLIDE_ID: u32 = 256;
const SLIDE_MASTER_ID: u32 = 2_147_483_648;
const APPLICATION: &str = env!("CARGO_PKG_NAME");

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add slides, set dimensions, and serialize the result
/// as a complete `.pptx` package.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Core-properties title
    title: String,
}

fn uri(s: &str) -> Result<PackURI> {
    Ok(PackURI::new(s).map_err(OpcError::InvalidPackUri)?)
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9144000,  // 10 inches
            slide_height: 6858000, // 7.5 inches
            title: "PowerPoint Presentation".to_string(),
        }
    }

    /// Add a new slide to the presentation.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let index = self.slides.len();
        let slide_id = FIRST_SLIDE_ID + index as u32;
        self.slides.push(MutableSlide::new(slide_id));
        &mut self.slides[index]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Set the slide width in EMUs.
    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide height in EMUs.
    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Save the presentation to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_package()?.save(path)?;
        info!(path = %path.display(), slides = self.slides.len(), "presentation saved");
        Ok(())
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.to_package()?.to_bytes()?)
    }

    /// Build the OPC package: presentation part, master, layout, theme,
    /// property parts, and one part per slide.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();

        let pres_uri = uri("/ppt/presentation.xml")?;
        let master_uri = uri("/ppt/slideMasters/slideMaster1.xml")?;
        let layout_uri = uri("/ppt/slideLayouts/slideLayout1.xml")?;
        let theme_uri = uri("/ppt/theme/theme1.xml")?;
        let pres_props_uri = uri("/ppt/presProps.xml")?;
        let table_styles_uri = uri("/ppt/tableStyles.xml")?;
        let core_uri = uri("/docProps/core.xml")?;
        let app_uri = uri("/docProps/app.xml")?;

        let mut pres_part = Part::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_rel_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        pres_part.relate_to(&theme_uri, rt::THEME);
        pres_part.relate_to(&pres_props_uri, rt::PRES_PROPS);
        pres_part.relate_to(&table_styles_uri, rt::TABLE_STYLES);

        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());
        for (index, slide) in self.slides.iter().enumerate() {
            let slide_uri = uri(&format!("/ppt/slides/slide{}.xml", index + 1))?;
            slide_rel_ids.push(pres_part.relate_to(&slide_uri, rt::SLIDE));

            let mut slide_part =
                Part::new(slide_uri, ct::PML_SLIDE, slide.to_xml()?.into_bytes());
            slide_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            debug!(slide_id = slide.slide_id(), shapes = slide.shape_count(), "slide serialized");
            pkg.add_part(slide_part)?;
        }

        pres_part.set_blob(
            self.generate_presentation_xml(&master_rel_id, &slide_rel_ids)?
                .into_bytes(),
        );
        pkg.add_part(pres_part)?;

        let mut master_part = Part::new(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::slide_master_xml().as_bytes().to_vec(),
        );
        // The master XML refers to its layout as rId1
        master_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        master_part.relate_to(&theme_uri, rt::THEME);
        pkg.add_part(master_part)?;

        let mut layout_part = Part::new(
            layout_uri,
            ct::PML_SLIDE_LAYOUT,
            template::blank_layout_xml().as_bytes().to_vec(),
        );
        layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        pkg.add_part(layout_part)?;

        pkg.add_part(Part::new(
            theme_uri,
            ct::OFC_THEME,
            template::theme_xml().as_bytes().to_vec(),
        ))?;
        pkg.add_part(Part::new(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::pres_props_xml().as_bytes().to_vec(),
        ))?;
        pkg.add_part(Part::new(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::table_styles_xml().as_bytes().to_vec(),
        ))?;
        pkg.add_part(Part::new(
            core_uri.clone(),
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(&self.title, APPLICATION, Utc::now()).into_bytes(),
        ))?;
        pkg.add_part(Part::new(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(APPLICATION, self.slides.len()).into_bytes(),
        ))?;

        pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        pkg.relate_to(&core_uri, rt::CORE_PROPERTIES);
        pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        Ok(pkg)
    }

    /// Generate presentation.xml content with actual relationship IDs.
    fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID, master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
