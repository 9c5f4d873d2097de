/// Package implementation for PowerPoint presentations.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::pptx::presentation::Presentation;
use std::io::{Read, Seek};
use std::path::Path;

/// A PowerPoint (.pptx) package opened for reading.
///
/// Wraps an OPC package and checks that its main part is a presentation.
///
/// # Examples
///
/// ```rust,no_run
/// use slidewright::ooxml::pptx::Package;
///
/// let pkg = Package::open("deck.pptx")?;
/// let pres = pkg.presentation()?;
/// println!("Presentation has {} slides", pres.slide_count()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    /// The underlying OPC package
    opc: OpcPackage,
}

impl Package {
    /// Open a .pptx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::verified(OpcPackage::open(path)?)
    }

    /// Create a .pptx package from a reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::verified(OpcPackage::from_reader(reader)?)
    }

    /// Create a .pptx package from in-memory bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::verified(OpcPackage::from_bytes(data)?)
    }

    fn verified(opc: OpcPackage) -> Result<Self> {
        let main_part = opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main presentation part: {}", e)))?;

        // Support both regular and macro-enabled presentations
        let content_type = main_part.content_type();
        if content_type != ct::PML_PRESENTATION_MAIN && content_type != ct::PML_PRES_MACRO_MAIN {
            return Err(OoxmlError::InvalidContentType {
                expected: format!(
                    "{} or {}",
                    ct::PML_PRESENTATION_MAIN,
                    ct::PML_PRES_MACRO_MAIN
                ),
                got: content_type.to_string(),
            });
        }

        Ok(Self { opc })
    }

    /// Get the main presentation.
    pub fn presentation(&self) -> Result<Presentation<'_>> {
        let main_part = self
            .opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main presentation part: {}", e)))?;
        Ok(Presentation::new(main_part, &self.opc))
    }

    /// Get the underlying OPC package.
    #[inline]
    pub fn opc_package(&self) -> &OpcPackage {
        &self.opc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{RGBColor, inches};
    use crate::ooxml::opc::constants::relationship_type as rt;
    use crate::ooxml::opc::{PackURI, Part};
    use crate::ooxml::pptx::SlideBackground;
    use crate::ooxml::pptx::writer::{MutablePresentation, TableData};

    fn sample() -> MutablePresentation {
        let mut pres = MutablePresentation::new();
        pres.set_slide_width(inches(13.333));
        pres.set_slide_height(inches(7.5));

        let slide = pres.add_slide();
        slide.set_background(SlideBackground::solid(RGBColor::new(0x0F, 0x1F, 0x33)));
        slide.add_rectangle(0, 0, 100, 100).fill(RGBColor::WHITE).no_line();
        slide
            .add_text_box("Thank You\n& goodbye", 0, 0, 100, 100)
            .word_wrap(true)
            .bold(true);

        let slide = pres.add_slide();
        let mut table = TableData::new(2, 2, inches(12.3), inches(0.8)).unwrap();
        table.cell_mut(0, 0).unwrap().set_text("Year");
        table.cell_mut(1, 1).unwrap().set_text("$34.9M\nLaunch <year>");
        slide.add_table(table, inches(0.5), inches(1.5));

        pres
    }

    #[test]
    fn test_round_trip_slides() {
        let pkg = Package::from_bytes(sample().to_bytes().unwrap()).unwrap();
        let pres = pkg.presentation().unwrap();

        assert_eq!(pres.slide_count().unwrap(), 2);
        assert_eq!(
            pres.slide_size().unwrap(),
            Some((12_191_695, 6_858_000))
        );
        let ids: Vec<u32> = pres.slide_ids().unwrap().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![256, 257]);
    }

    #[test]
    fn test_round_trip_slide_content() {
        let pkg = Package::from_bytes(sample().to_bytes().unwrap()).unwrap();
        let pres = pkg.presentation().unwrap();
        let slides = pres.slides().unwrap();

        let first = &slides[0];
        assert_eq!(
            first.background_color().unwrap(),
            Some(RGBColor::new(0x0F, 0x1F, 0x33))
        );
        assert_eq!(first.shape_count().unwrap(), 2);
        assert_eq!(first.text_boxes().unwrap(), vec!["Thank You\n& goodbye".to_string()]);
        assert_eq!(first.layout_name().unwrap().as_deref(), Some("Blank"));

        let second = &slides[1];
        assert_eq!(second.background_color().unwrap(), None);
        let tables = second.tables().unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].cell(0, 0).unwrap().text(), "Year");
        assert_eq!(tables[0].cell(1, 1).unwrap().text(), "$34.9M\nLaunch <year>");
        assert_eq!(tables[0].cell(1, 0).unwrap().text(), "");
    }

    #[test]
    fn test_rejects_non_presentation() {
        let mut opc = OpcPackage::new();
        let uri = PackURI::new("/word/document.xml").unwrap();
        opc.add_part(Part::new(
            uri.clone(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
            b"<w:document/>".to_vec(),
        ))
        .unwrap();
        opc.relate_to(&uri, rt::OFFICE_DOCUMENT);

        let result = Package::from_bytes(opc.to_bytes().unwrap());
        assert!(matches!(result, Err(OoxmlError::InvalidContentType { .. })));
    }

    #[test]
    fn test_open_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.pptx");
        sample().save(&path).unwrap();

        let pkg = Package::open(&path).unwrap();
        assert_eq!(pkg.presentation().unwrap().slide_count().unwrap(), 2);
    }
}
