use utoipa::{Modify, OpenApi};

use crate::features::pajak::{dtos as pajak_dtos, handlers as pajak_handlers, models as pajak_models};
use crate::features::pajakwisata::{
    dtos as pajakwisata_dtos, handlers as pajakwisata_handlers, models as pajakwisata_models,
};
use crate::features::penduduk::{
    dtos as penduduk_dtos, handlers as penduduk_handlers, models as penduduk_models,
};
use crate::features::setoran::{
    dtos as setoran_dtos, handlers as setoran_handlers, models as setoran_models,
};
use crate::features::wisata::{handlers as wisata_handlers, models as wisata_models};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Pajak
        pajak_handlers::add_pajak,
        pajak_handlers::list_pajak,
        pajak_handlers::get_pajak_by_id,
        pajak_handlers::update_pajak_by_id,
        pajak_handlers::delete_pajak_by_id,
        // Wisata (remote)
        wisata_handlers::list_wisata,
        wisata_handlers::get_wisata_by_id,
        // Penduduk
        penduduk_handlers::post_penduduk,
        penduduk_handlers::get_penduduk,
        penduduk_handlers::get_penduduk_by_nik,
        penduduk_handlers::update_penduduk_by_nik,
        penduduk_handlers::delete_penduduk_by_nik,
        // Sub-registries
        penduduk_handlers::tambah_pendudukrental,
        penduduk_handlers::get_pendudukrental,
        penduduk_handlers::get_pendudukrental_by_nik,
        penduduk_handlers::update_pendudukrental_by_nik,
        penduduk_handlers::delete_pendudukrental,
        penduduk_handlers::tambah_pendudukhotel,
        penduduk_handlers::get_pendudukhotel,
        penduduk_handlers::get_pendudukhotel_by_nik,
        penduduk_handlers::update_pendudukhotel_by_nik,
        penduduk_handlers::delete_pendudukhotel,
        penduduk_handlers::post_pendudukasuransi,
        penduduk_handlers::get_pendudukasuransi,
        penduduk_handlers::get_pendudukasuransi_by_nik,
        penduduk_handlers::post_pendudukbank,
        penduduk_handlers::get_pendudukbank,
        penduduk_handlers::get_pendudukbank_by_nik,
        // Sibling proxies
        penduduk_handlers::get_asuransi,
        penduduk_handlers::get_bank,
        penduduk_handlers::get_hotel,
        penduduk_handlers::get_pelanggan,
        penduduk_handlers::get_tourguide,
        // Setoran
        setoran_handlers::add_setoran,
        setoran_handlers::get_setoran,
        setoran_handlers::get_setoran_by_status,
        // Pajakwisata (merge engine)
        pajakwisata_handlers::get_pajak_wisata,
        pajakwisata_handlers::get_pajak_wisata_by_id,
        pajakwisata_handlers::create_pajak_wisata,
        pajakwisata_handlers::update_pajak_wisata,
        pajakwisata_handlers::delete_pajak_wisata,
    ),
    components(
        schemas(
            // Pajak
            pajak_models::Pajak,
            pajak_dtos::PajakDto,
            ApiResponse<pajak_models::Pajak>,
            ApiResponse<Vec<pajak_models::Pajak>>,
            // Wisata
            wisata_models::Wisata,
            ApiResponse<wisata_models::Wisata>,
            ApiResponse<Vec<wisata_models::Wisata>>,
            // Penduduk
            penduduk_models::Penduduk,
            penduduk_dtos::PendudukDto,
            ApiResponse<penduduk_models::Penduduk>,
            ApiResponse<Vec<penduduk_models::Penduduk>>,
            // Sub-registries
            penduduk_models::PendudukRental,
            penduduk_models::PendudukHotel,
            penduduk_models::PendudukAsuransi,
            penduduk_models::PendudukBank,
            penduduk_dtos::PendudukRentalDto,
            penduduk_dtos::PendudukHotelDto,
            penduduk_dtos::PendudukAsuransiDto,
            penduduk_dtos::PendudukBankDto,
            ApiResponse<penduduk_models::PendudukRental>,
            ApiResponse<Vec<penduduk_models::PendudukRental>>,
            ApiResponse<penduduk_models::PendudukHotel>,
            ApiResponse<Vec<penduduk_models::PendudukHotel>>,
            ApiResponse<penduduk_models::PendudukAsuransi>,
            ApiResponse<Vec<penduduk_models::PendudukAsuransi>>,
            ApiResponse<penduduk_models::PendudukBank>,
            ApiResponse<Vec<penduduk_models::PendudukBank>>,
            // Sibling feeds
            penduduk_models::Asuransi,
            penduduk_models::Bank,
            penduduk_models::Hotel,
            penduduk_models::Rental,
            penduduk_models::Guide,
            ApiResponse<Vec<penduduk_models::Asuransi>>,
            ApiResponse<Vec<penduduk_models::Bank>>,
            ApiResponse<Vec<penduduk_models::Hotel>>,
            ApiResponse<Vec<penduduk_models::Rental>>,
            ApiResponse<Vec<penduduk_models::Guide>>,
            // Setoran
            setoran_models::Setoran,
            setoran_dtos::SetoranDto,
            ApiResponse<setoran_models::Setoran>,
            ApiResponse<Vec<setoran_models::Setoran>>,
            // Pajakwisata
            pajakwisata_models::Pajakwisata,
            pajakwisata_dtos::PajakwisataDto,
            ApiResponse<pajakwisata_models::Pajakwisata>,
            ApiResponse<Vec<pajakwisata_models::Pajakwisata>>,
        )
    ),
    tags(
        (name = "pajak", description = "Tax records for tourism objects"),
        (name = "wisata", description = "Tourism objects (proxied from the tourism service)"),
        (name = "penduduk", description = "Resident civil register"),
        (name = "pendudukrental", description = "Resident sub-registry for the car-rental group"),
        (name = "pendudukhotel", description = "Resident sub-registry for the hotel group"),
        (name = "pendudukasuransi", description = "Resident sub-registry for the insurance group"),
        (name = "pendudukbank", description = "Resident sub-registry for the bank group"),
        (name = "sibling", description = "Partner group registries (proxied)"),
        (name = "setoranpajak", description = "Tax deposit records"),
        (name = "pajakwisata", description = "Merged tax + tourism records"),
    ),
    info(
        title = "Government API Documentation",
        version = "0.1.0",
        description = "API untuk mengelola data pemerintahan",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
